


use std::sync::Arc;
use crate::config::{Context, Env as ConfigEnv};
use mailreq::Mailer;
use storagereq::Storage;

pub const APP_NAME: &str = "Cashifygcmart";
pub type IntakeHttpResponse = Result<actix_web::HttpResponse, actix_web::Error>;


pub static SUBMISSION_RECEIVED: &str = "Gift card submission received successfully";
pub static SUBMISSION_FAILED: &str = "An error occurred while processing your submission";
pub static HELLO_WORLD: &str = "Hello World";
pub static API_IS_WORKING: &str = "API is working";
pub static STORAGE_ISSUE: &str = "Storage Is Not Available";
pub static FIRST_NAME_CANT_BE_EMPTY: &str = "First Name Can't Be Empty";
pub static LAST_NAME_CANT_BE_EMPTY: &str = "Last Name Can't Be Empty";
pub static EMAIL_CANT_BE_EMPTY: &str = "Email Can't Be Empty";
pub static INVALID_EMAIL_FORMAT: &str = "Invalid Email Address Format";
pub static NOT_PROVIDED: &str = "Not provided";
pub static UNDER_REVIEW_STATUS: &str = "under_review";
pub static OPERATIONS_MAIL_FALLBACK: &str = "operations@cashifygcmart.com";
pub static SUPPORT_MAIL: &str = "support@cashifygcmart.com";

pub static SERVER_IO_ERROR_CODE: &u16 = &0xFFFE;
pub static STORAGE_IO_ERROR_CODE: &u16 = &0xFFFF;
pub const LOGS_FOLDER_ERROR_KIND: &str = "logs/error-kind";

/* a hung smtp relay can only hold the response back this long per channel */
pub const MAIL_SEND_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(8);
pub const STATUS_CHECKS_FETCH_LIMIT: i64 = 1000;
pub static GIFT_CARD_SUBMISSIONS_COLLECTION: &str = "gift_card_submissions";
pub static STATUS_CHECKS_COLLECTION: &str = "status_checks";


/*
    the whole app state that gets shared between actix workers' threads,
    every api extracts what it needs from this instead of rebuilding its
    own storage client or smtp transport per request
*/
#[derive(Clone)]
pub struct AppState{
    pub app_storage: Option<Arc<Storage>>, // the mongodb client cell built by storagereq::storage!{}
    pub mailer: Option<Arc<Box<dyn Mailer + Send + Sync + 'static>>>, // the mail channel built by mailreq::from_env()
    pub config: Option<Arc<Context<ConfigEnv>>>, // a snapshot of all env vars taken at boot
}

impl AppState{

    pub fn init() -> Self{
        Self{
            app_storage: None,
            mailer: None,
            config: None,
        }
    }
}
