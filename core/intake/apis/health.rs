


use actix_web::{get, post, web};
use actix_web::http::StatusCode;
use serde::{Serialize, Deserialize};
use crate::constants::*;
use crate::models::status_checks::StatusCheck;
use crate::resp;



/*
     ------------------------
    |        SCHEMAS
    | ------------------------
    |
    |

*/
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Greeting{
    pub message: String,
}


/*
     ------------------------
    |          APIS
    | ------------------------
    |
    |

*/
#[get("/")]
pub async fn index() -> IntakeHttpResponse{

    let greeting = Greeting{
        message: HELLO_WORLD.to_string(),
    };

    resp!{
        Greeting, // the data type
        greeting, // response data
        StatusCode::OK, // status code
    }
}

#[post("/status")]
pub async fn create_status_check(
        app_state: web::Data<AppState>,
    ) -> IntakeHttpResponse{

    let app_storage = app_state.app_storage.clone();
    let storage_client = match app_storage.as_ref(){
        Some(storage) => storage.get_mongodb().await,
        None => None,
    };

    /* the probe takes no body at all, the doc is always the same liveness message */
    let probe = StatusCheck::default();
    let saved = match probe.save(storage_client).await{
        Ok(saved) => saved,
        Err(error_resp) => {
            return error_resp;
        }
    };

    resp!{
        StatusCheck, // the data type
        saved, // response data
        StatusCode::OK, // status code
    }
}

#[get("/status")]
pub async fn get_status_checks(
        app_state: web::Data<AppState>,
    ) -> IntakeHttpResponse{

    let app_storage = app_state.app_storage.clone();
    let storage_client = match app_storage.as_ref(){
        Some(storage) => storage.get_mongodb().await,
        None => None,
    };

    let checks = match StatusCheck::fetch_recent(storage_client).await{
        Ok(checks) => checks,
        Err(error_resp) => {
            return error_resp;
        }
    };

    resp!{
        Vec<StatusCheck>, // the data type
        checks, // response data
        StatusCode::OK, // status code
    }
}


pub mod exports{
    pub use super::index;
    pub use super::create_status_check;
    pub use super::get_status_checks;
}


#[cfg(test)]
mod tests{

    use std::sync::Arc;
    use actix_web::{test, App};
    use actix_web::web::Data;
    use storagereq::Storage;
    use crate::misc::IntakeFailureResponse;
    use crate::services;
    use super::*;

    #[actix_web::test]
    async fn the_root_always_says_hello(){

        let app = test::init_service(
            App::new()
                .app_data(Data::new(AppState::init()))
                .service(actix_web::web::scope("/api").configure(services::init_health))
        ).await;

        let req = test::TestRequest::get().uri("/api/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Greeting = test::read_body_json(resp).await;
        assert_eq!(body.message, HELLO_WORLD);
    }

    #[actix_web::test]
    async fn status_probes_need_live_storage(){

        let mut app_state = AppState::init();
        app_state.app_storage = Some(Arc::new(Storage::default()));

        let app = test::init_service(
            App::new()
                .app_data(Data::new(app_state))
                .service(actix_web::web::scope("/api").configure(services::init_health))
        ).await;

        let post_req = test::TestRequest::post().uri("/api/status").to_request();
        let post_resp = test::call_service(&app, post_req).await;
        assert_eq!(post_resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let post_body: IntakeFailureResponse = test::read_body_json(post_resp).await;
        assert_eq!(post_body.message, STORAGE_ISSUE);

        let get_req = test::TestRequest::get().uri("/api/status").to_request();
        let get_resp = test::call_service(&app, get_req).await;
        assert_eq!(get_resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
