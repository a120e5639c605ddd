


/*
   -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=
        INTAKE CUSTOM ERROR HANDLER
   -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=

   custom error handler is useful to specify the exact type of error at runtime
   instead of using Box<dyn Error> which handles all possible errors at runtime
   dynamically and may causes the app gets panicked at runtime
*/


use std::io::Write;
use log::error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use crate::constants::LOGS_FOLDER_ERROR_KIND;


#[derive(Debug)]
pub struct IntakeError{
    pub code: u16,
    pub msg: Vec<u8>, // reason
    pub kind: ErrorKind, // due to what service
    pub method_name: String // in what method
}


#[derive(Debug)]
pub enum StorageError{
    Mongodb(mongodb::error::Error)
}
#[derive(Debug)]
pub enum ServerError{
    ActixWeb(std::io::Error),
}
#[derive(Debug)]
pub enum ErrorKind{
    Server(ServerError), // actix server io
    Storage(StorageError), // mongodb
}

/*
    make it sendable to be shared between threads also note that
    Send and Sync can only be implement for a type that is inside
    the current crate thus can't be implemented for actix_web::HttpResponse
*/
unsafe impl Send for IntakeError{}
unsafe impl Sync for IntakeError{}

impl std::error::Error for ErrorKind{}

impl std::fmt::Display for ErrorKind{

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result{
        f.write_fmt(
            format_args!(
                "ERROR: {:?} at {}",
                self,
                chrono::Local::now().to_string()
            )
        )
    }
}

/* can be made using from() method */
impl From<std::io::Error> for ErrorKind{
    fn from(error: std::io::Error) -> Self {
        ErrorKind::Server(ServerError::ActixWeb(error))
    }
}

impl From<mongodb::error::Error> for ErrorKind{
    fn from(error: mongodb::error::Error) -> Self{
        ErrorKind::Storage(StorageError::Mongodb(error))
    }
}

impl From<(Vec<u8>, u16, ErrorKind, String)> for IntakeError{
    fn from(msg_code_kind_method: (Vec<u8>, u16, ErrorKind, String)) -> IntakeError{
        IntakeError { code: msg_code_kind_method.1, msg: msg_code_kind_method.0, kind: msg_code_kind_method.2, method_name: msg_code_kind_method.3 }
    }
}


impl IntakeError{

    pub fn new(code: u16, msg: Vec<u8>, kind: ErrorKind, method_name: &str) -> Self{

        let err = IntakeError::from((msg, code, kind, method_name.to_string()));

        err
    }

    pub async fn write(&self) -> impl Write{

        let this = self;
        let Self { code, msg, kind, method_name } = this;

        /* creating the logs/error-kind folder if it doesn't exist */
        let _ = tokio::fs::create_dir_all(LOGS_FOLDER_ERROR_KIND).await;
        let filepath = format!("{}/intake-error.log", LOGS_FOLDER_ERROR_KIND);

        let msg_content = String::from_utf8(msg.to_owned()).unwrap_or_default();
        let error_log_content = format!("code: {} | message: {} | due to: {:?} | time: {} | method name: {}\n", code, msg_content, kind, chrono::Local::now().timestamp_millis(), method_name);

        /* writing to file */
        match tokio::fs::metadata(filepath.clone()).await{
            Ok(_) => {
                /* ------- we found the file, append to it ------- */
                match OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(filepath.as_str())
                    .await{
                        Ok(mut file) => {
                            let _ = file.write_all(error_log_content.as_bytes()).await;
                        },
                        Err(e) => {
                            error!("⚠️ can't append to the error log file - {}", e);
                        }
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                /* ------- we didn't found the file, create a new one ------- */
                match tokio::fs::File::create(filepath.as_str()).await{
                    Ok(mut intake_error_log) => {
                        let _ = intake_error_log.write_all(error_log_content.as_bytes()).await;
                    },
                    Err(e) => {
                        error!("⚠️ can't create the error log file - {}", e);
                    }
                }
            },
            Err(e) => {
                /* ------- can't create a new file or append to it ------- */
                error!("⚠️ can't touch the error log file - {}", e);
            }
        }

        /* writing to buffer */
        let mut buffer = Vec::new();
        let _ = write!(&mut buffer, "{}", error_log_content); /* writing to buffer */

        buffer /* returns the full filled buffer from the error  */

    }

}
