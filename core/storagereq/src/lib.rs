


use mongodb::Client;
use uuid::Uuid;


/*  ----------------------
   | shared state storage
   |----------------------
   | mongodb
   |
*/


#[derive(Clone)] // can't bound Copy trait cause engine and url are String which are heap data structure
pub struct Db{
    pub mode: Mode,
    pub engine: Option<String>,
    pub url: Option<String>,
    pub instance: Option<Client>,
}

impl Default for Db{
    fn default() -> Db {
        Db{
            mode: self::Mode::Off,
            engine: None,
            url: None,
            instance: None,
        }
    }
}

impl Db{

    pub async fn new() -> Result<Db, Box<dyn std::error::Error>>{
        Ok(
            Db{
                mode: Mode::On, // 1 means is on
                engine: None,
                url: None,
                instance: None,
            }
        )
    }

    /*
        Client object uses std::sync::Arc internally, so it can safely be
        shared across threads or async tasks like tokio::spawn(async move{})
        green threads also it is highly recommended to create a single
        Client and persist it for the lifetime of your application.
    */
    pub async fn get_mongodb_instance(&self) -> Result<Client, mongodb::error::Error>{ // the url field must be filled by the caller before calling this method
        Client::with_uri_str(self.url.as_ref().unwrap()).await // building mongodb client instance
    }

}

#[derive(Clone, Default)]
pub struct Storage{
    pub id: Uuid,
    pub db: Option<Db>, // we could have no db at all
}

impl Storage{

    /*
        we've used the lifetime of self param to return a reference to
        the mongodb Client object, the instance must not get moved out
        of the storage cell cause it's going to be shared between actix
        worker threads
    */

    pub async fn get_mongodb(&self) -> Option<&Client>{
        match self.db.as_ref()?.mode{
            Mode::On => self.db.as_ref().unwrap().instance.as_ref(), // return the db if it wasn't detached from the server - instance.as_ref() will return the Option<&Client> or Option<&T>
            Mode::Off => None, // no storage is available cause it's off
        }
    }

}

#[derive(Copy, Clone, Debug)]
pub enum Mode{ // enum uses 8 bytes (usize which is 64 bits on 64 bits arch) tag which is a pointer pointing to the current variant
    On, // zero byte size
    Off, // zero byte size
}


#[macro_export]
macro_rules! storage {

    ($name:expr, $engine:expr, $host:expr, $port:expr, $username:expr, $password:expr) => {

        async { // this curly braces is required to use if let statement, use libs and define let inside macro

            use storagereq::{Storage, Mode, Db};

            let empty_app_storage = Some( // putting the Arc-ed db inside the Option
                Arc::new( // cloning app_storage to move it between threads
                    Storage{ // defining db context
                        id: Uuid::new_v4(),
                        db: Some(
                            Db{
                                mode: Mode::Off,
                                instance: None,
                                engine: None,
                                url: None,
                            }
                        ),
                    }
                )
            );
            let app_storage = if $engine.as_str() == "mongodb"{
                info!("➔ 🛢️ switching to mongodb on address: [{}:{}]", $host, $port);
                let environment = env::var("ENVIRONMENT").expect("⚠️ no environment variable set");
                let db_addr = if environment == "dev"{
                    format!("{}://{}:{}", $engine, $host, $port)
                } else if environment == "prod"{
                    format!("{}://{}:{}@{}:{}", $engine, $username, $password, $host, $port)
                } else{
                    "".to_string()
                };
                match Db::new().await{
                    Ok(mut init_db) => { // init_db instance must be mutable since we want to mutate its fields
                        init_db.engine = Some($engine);
                        init_db.url = Some(db_addr);
                        match init_db.get_mongodb_instance().await{
                            Ok(mongodb_instance) => {
                                Some( // putting the Arc-ed db inside the Option
                                    Arc::new( // cloning app_storage to move it between threads
                                        Storage{ // defining db context
                                            id: Uuid::new_v4(),
                                            db: Some(
                                                Db{
                                                    mode: init_db.mode,
                                                    instance: Some(mongodb_instance),
                                                    engine: init_db.engine,
                                                    url: init_db.url,
                                                }
                                            ),
                                        }
                                    )
                                )
                            },
                            Err(e) => {
                                error!("😕 can't build mongodb client - {}", e);
                                empty_app_storage // whatever the error is we have to return an empty app storage instance
                            }
                        }
                    },
                    Err(e) => {
                        error!("😕 init db error - {}", e);
                        empty_app_storage // whatever the error is we have to return an empty app storage instance
                    }
                }
            } else{
                empty_app_storage
            };

            app_storage // returning the created app_storage

        }
    };

}
