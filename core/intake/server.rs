


#[macro_export]
macro_rules! server {
    (

        /* ... setup args go here ... */

    ) => {

        {

            use std::env;
            use std::sync::Arc;
            use actix_cors::Cors;
            use actix_web::{web, App, HttpServer};
            use actix_web::middleware::Logger;
            use actix_web::web::Data;
            use dotenv::dotenv;
            use env_logger::Env;
            use log::{info, error};
            use uuid::Uuid;
            use crate::config::{Env as ConfigEnv, EnvExt};
            use crate::constants::*;
            use crate::services;


            dotenv().ok();
            env_logger::init_from_env(Env::default().default_filter_or("info"));
            let host = std::env::var("HOST").expect("⚠️ no host variable set");
            let port = std::env::var("INTAKE_PORT").expect("⚠️ no intake port variable set").parse::<u16>().unwrap();
            let db_host = env::var("DB_HOST").expect("⚠️ no db host variable set");
            let db_port = env::var("DB_PORT").expect("⚠️ no db port variable set");
            let db_username = env::var("DB_USERNAME").expect("⚠️ no db username variable set");
            let db_password = env::var("DB_PASSWORD").expect("⚠️ no db password variable set");
            let db_engine = env::var("DB_ENGINE").expect("⚠️ no db engine variable set");
            let db_name = env::var("DB_NAME").expect("⚠️ no db name variable set");

            /*
                app_storage is the mongodb client cell, a bad db config yields
                a cell with no instance inside rather than a crash, the intake
                api answers with a 500 until the storage comes back
            */
            let app_storage = storagereq::storage!{
                db_name,
                db_engine,
                db_host,
                db_port,
                db_username,
                db_password
            }.await;

            /* the mail channel, smtp by default or the console backend for local runs */
            let app_mailer = mailreq::from_env(APP_NAME);

            /*
                                SETTING UP SHARED STATE DATA

                the storage cell, the mail channel and the env snapshot get built
                once in here then shared between all actix workers' threads, every
                api extracts them through its web::Data<AppState> handle
            */
            let mut app_state = AppState::init();
            app_state.app_storage = app_storage.clone();
            app_state.mailer = Some(Arc::new(app_mailer));
            app_state.config = {
                let env = ConfigEnv::default();
                let ctx_env = env.get_vars();
                Some(Arc::new(ctx_env))
            };
            let shared_state_app = Data::new(app_state.clone()); // making the app state as a shareable data

            let allowed_origins = env::var("CORS_ORIGINS").unwrap_or("*".to_string());

            /*
                the HttpServer::new function takes a factory function that produces
                an instance of the App, not the App instance itself, because each
                worker thread needs to have its own App instance
            */
            info!("➔ 🚀 {} intake HTTP server has launched from [{}:{}] at {}", APP_NAME, host, port, chrono::Local::now().naive_local());
            let s = match HttpServer::new(move ||{
                /*
                    each thread of the HttpServer instance needs its own app factory
                    and its own cors instance since cors can't be shared between threads
                */
                let cors = if allowed_origins.trim() == "*"{
                    Cors::permissive()
                } else{
                    let mut cors = Cors::default()
                        .allow_any_method()
                        .allow_any_header()
                        .supports_credentials();
                    for origin in allowed_origins.split(','){
                        cors = cors.allowed_origin(origin.trim());
                    }
                    cors
                };
                App::new()
                    /*
                        SHARED STATE DATA
                    */
                    .app_data(Data::clone(&shared_state_app.clone()))
                    .wrap(cors)
                    .wrap(Logger::default())
                    .wrap(Logger::new("%a %{User-Agent}i %t %P %r %s %b %T %D"))
                    /*
                        INIT INTAKE AND HEALTH SERVICES
                    */
                    .service(
                        actix_web::web::scope("/api")
                            .configure(services::init_intake)
                            .configure(services::init_health)
                    )
                })
                .bind((host.as_str(), port)){
                    Ok(server) => {
                        server
                            /*
                                running the http server in a threadpool with 10 spawned
                                threads to handle incoming connections asyncly and concurrently
                            */
                            .workers(10)
                            .run()
                            .await
                    },
                    Err(e) => {

                        /* custom error handler */
                        use crate::error::{ErrorKind, IntakeError};

                        let error_content = &e.to_string();
                        let error_content = error_content.as_bytes().to_vec();

                        let error_instance = IntakeError::new(*SERVER_IO_ERROR_CODE, error_content, ErrorKind::from(e), "HttpServer::new().bind");
                        error_instance.write().await; /* writes to file and returns the full filled buffer from the error  */

                        panic!("panicked at running actix web server at {}", chrono::Local::now());


                    }
                };


            /*
                this can't be reachable unless we hit the ctrl + c since the
                http server will be built inside multiple threads in which all
                server instances will be ran constantly in the background
            */
            s /* returning the server which is being ran constantly in the background threads */

        }
    };
}
