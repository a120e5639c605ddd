


use actix_web::HttpResponse;
use futures::TryStreamExt;
use log::error;
use mongodb::Client;
use mongodb::options::FindOptions;
use serde::{Serialize, Deserialize};
use crate::constants::*;
use crate::error::{ErrorKind, IntakeError};
use crate::misc::IntakeFailureResponse;



/* a probe document, uptime monitors post one and read the lot back */
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatusCheck{
    pub message: String,
}

impl Default for StatusCheck{
    fn default() -> Self{
        Self{
            message: API_IS_WORKING.to_string(),
        }
    }
}

impl StatusCheck{

    pub async fn save(&self, storage_client: Option<&Client>) -> Result<StatusCheck, IntakeHttpResponse>{

        let Some(client) = storage_client else{
            let resp = IntakeFailureResponse{
                success: false,
                message: STORAGE_ISSUE.to_string(),
            };
            return Err(
                Ok(HttpResponse::InternalServerError().json(resp))
            );
        };

        let db_name = std::env::var("DB_NAME").unwrap_or("cashifygcmart".to_string());
        let status_checks = client
            .database(&db_name)
            .collection::<StatusCheck>(STATUS_CHECKS_COLLECTION);

        match status_checks.insert_one(self, None).await{
            Ok(_) => Ok(self.clone()),
            Err(e) => {

                /* custom error handler */
                let error_content = &e.to_string();
                let error_content = error_content.as_bytes().to_vec();
                let error_instance = IntakeError::new(*STORAGE_IO_ERROR_CODE, error_content, ErrorKind::from(e), "StatusCheck::save");
                error_instance.write().await; /* writes to file and returns the full filled buffer from the error  */

                let resp = IntakeFailureResponse{
                    success: false,
                    message: STORAGE_ISSUE.to_string(),
                };
                return Err(
                    Ok(HttpResponse::InternalServerError().json(resp))
                );

            }
        }
    }

    pub async fn fetch_recent(storage_client: Option<&Client>) -> Result<Vec<StatusCheck>, IntakeHttpResponse>{

        let Some(client) = storage_client else{
            let resp = IntakeFailureResponse{
                success: false,
                message: STORAGE_ISSUE.to_string(),
            };
            return Err(
                Ok(HttpResponse::InternalServerError().json(resp))
            );
        };

        let db_name = std::env::var("DB_NAME").unwrap_or("cashifygcmart".to_string());
        let status_checks = client
            .database(&db_name)
            .collection::<StatusCheck>(STATUS_CHECKS_COLLECTION);

        let find_options = FindOptions::builder()
            .limit(STATUS_CHECKS_FETCH_LIMIT)
            .build();

        match status_checks.find(None, find_options).await{
            Ok(mut cursor) => {

                let mut checks = Vec::new();
                loop{
                    match cursor.try_next().await{
                        Ok(Some(check)) => checks.push(check),
                        Ok(None) => break,
                        Err(cursor_error) => {
                            error!("🛢️ status check cursor stopped early - {}", cursor_error);
                            break;
                        }
                    }
                }

                Ok(checks)
            },
            Err(e) => {

                /* custom error handler */
                let error_content = &e.to_string();
                let error_content = error_content.as_bytes().to_vec();
                let error_instance = IntakeError::new(*STORAGE_IO_ERROR_CODE, error_content, ErrorKind::from(e), "StatusCheck::fetch_recent");
                error_instance.write().await; /* writes to file and returns the full filled buffer from the error  */

                let resp = IntakeFailureResponse{
                    success: false,
                    message: STORAGE_ISSUE.to_string(),
                };
                return Err(
                    Ok(HttpResponse::InternalServerError().json(resp))
                );

            }
        }
    }
}
