


use actix_web::{post, web};
use actix_web::http::StatusCode;
use log::error;
use mailreq::Mailer;
use serde::{Serialize, Deserialize};
use tokio::time::timeout;
use crate::constants::*;
use crate::misc::IntakeFailureResponse;
use crate::models::gift_cards::{GiftCardSubmission, GiftCardSubmissionRecord};
use crate::resp;
use crate::templates;



/*
     ------------------------
    |        SCHEMAS
    | ------------------------
    |
    |

*/
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SubmitGiftCardResponse{
    pub success: bool,
    pub reference_number: String,
    pub message: String,
    pub customer_email_sent: bool,
    pub internal_email_sent: bool,
}


/*
     ------------------------
    |          APIS
    | ------------------------
    |
    |

*/
#[post("/submit-gift-card")]
pub async fn submit_gift_card(
        app_state: web::Data<AppState>,
        submission: web::Json<GiftCardSubmission>,
    ) -> IntakeHttpResponse{

    let submission = submission.into_inner();

    /* unusable contact details get bounced before we touch any backend */
    if let Err(rejection) = submission.validate(){
        let resp = IntakeFailureResponse{
            success: false,
            message: rejection.to_string(),
        };
        resp!{
            IntakeFailureResponse, // the data type
            resp, // response data
            StatusCode::NOT_ACCEPTABLE, // status code
        }
    }

    /* reference number, uuid and the under_review status get stamped in here */
    let record = GiftCardSubmissionRecord::new(submission);

    /*
        the record must be durable before anything else happens, a dead
        storage means a 500 and crucially zero mail going out
    */
    let app_storage = app_state.app_storage.clone();
    let storage_client = match app_storage.as_ref(){
        Some(storage) => storage.get_mongodb().await,
        None => None,
    };

    if let Err(error_resp) = record.save(storage_client).await{
        return error_resp;
    }

    /*
        both channels get awaited right here so the response can report
        truthful per channel outcomes, a broken mail day never takes the
        accepted submission down with it
    */
    let operations_mail = match app_state.config.as_ref(){
        Some(ctx) => ctx.vars.OPERATIONS_MAIL.clone(),
        None => std::env::var("OPERATIONS_MAIL").unwrap_or(OPERATIONS_MAIL_FALLBACK.to_string()),
    };

    let (customer_email_sent, internal_email_sent) = match app_state.mailer.clone(){
        Some(mailer) => dispatch_notifications(&**mailer, &operations_mail, &record).await,
        None => {
            error!("📧 no mail channel wired up, skipping notifications for [{}]", record.reference_number);
            (false, false)
        }
    };

    let accepted = SubmitGiftCardResponse{
        success: true,
        reference_number: record.reference_number.clone(),
        message: SUBMISSION_RECEIVED.to_string(),
        customer_email_sent,
        internal_email_sent,
    };
    resp!{
        SubmitGiftCardResponse, // the data type
        accepted, // response data
        StatusCode::OK, // status code
    }
}

/*
    composes both mails from the persisted record then pushes them through
    the channel, each send gets its own timeout window and a failed or hung
    one only flips its flag to false
*/
pub async fn dispatch_notifications(
        mailer: &(dyn Mailer + Send + Sync),
        operations_mail: &str,
        record: &GiftCardSubmissionRecord,
    ) -> (bool, bool){

    let confirmation_view = templates::ConfirmationMailView::from(record);
    let confirmation_subject = templates::confirmation_subject(&record.reference_number);
    let confirmation_body = templates::render_confirmation_mail(&confirmation_view);

    let operations_view = templates::OperationsMailView::from(record);
    let operations_subject = templates::operations_subject(&operations_view);
    let operations_body = templates::render_operations_mail(&operations_view);
    let attachments = templates::collect_attachments(&record.submission.cards);

    let customer_email_sent = match timeout(MAIL_SEND_TIMEOUT, mailer.send(&record.submission.email, &confirmation_subject, &confirmation_body, vec![])).await{
        Ok(sent) => sent,
        Err(_) => {
            error!("📧 confirmation mail timed out for [{}]", record.reference_number);
            false
        }
    };

    let internal_email_sent = match timeout(MAIL_SEND_TIMEOUT, mailer.send(operations_mail, &operations_subject, &operations_body, attachments)).await{
        Ok(sent) => sent,
        Err(_) => {
            error!("📧 operations mail timed out for [{}]", record.reference_number);
            false
        }
    };

    (customer_email_sent, internal_email_sent)
}


pub mod exports{
    pub use super::submit_gift_card;
}
