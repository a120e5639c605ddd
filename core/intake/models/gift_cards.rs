


use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use mongodb::Client;
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use crate::constants::*;
use crate::error::{ErrorKind, IntakeError};
use crate::misc::{self, IntakeFailureResponse};



/*
    the wire shapes below mirror the intake form field by field, the form posts
    camelCase keys so every struct speaks camelCase on the wire while the code
    keeps snake_case
*/
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ImageUpload{
    pub data: String, // base64 payload, usually shipped with a `data:<mime>;base64,` prefix
    pub name: String,
    #[serde(rename="type")]
    pub mime: String,
}

fn default_card_type() -> String{
    "physical".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all="camelCase")]
pub struct CardEntry{
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub has_receipt: String, // the form sends the literal strings `yes` and `no` in here
    #[serde(default="default_card_type")]
    pub card_type: String,
    #[serde(default)]
    pub digital_code: String,
    #[serde(default)]
    pub digital_pin: String,
    #[serde(default)]
    pub front_image: Option<ImageUpload>,
    #[serde(default)]
    pub back_image: Option<ImageUpload>,
    #[serde(default)]
    pub receipt_image: Option<ImageUpload>,
}

impl CardEntry{

    pub fn is_digital(&self) -> bool{
        self.card_type == "digital"
    }

    pub fn has_receipt(&self) -> bool{
        self.has_receipt == "yes"
    }
}


/*
    an unknown payout rail never makes it past deserialization, apis
    downstream get to match on the five known rails only
*/
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all="lowercase")]
pub enum PaymentMethod{
    #[default]
    Paypal,
    Zelle,
    Cashapp,
    Btc,
    Chime,
}

impl PaymentMethod{

    pub fn label(&self) -> &'static str{
        match self{
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Zelle => "Zelle",
            PaymentMethod::Cashapp => "Cash App",
            PaymentMethod::Btc => "Bitcoin",
            PaymentMethod::Chime => "Chime",
        }
    }
}


#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all="camelCase")]
pub struct GiftCardSubmission{
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub paypal_address: String,
    #[serde(default)]
    pub zelle_details: String,
    #[serde(default)]
    pub cash_app_tag: String,
    #[serde(default)]
    pub btc_address: String,
    #[serde(default)]
    pub chime_details: String,
    pub cards: Vec<CardEntry>, // must be present on the wire, an empty list is fine
}

impl GiftCardSubmission{

    /*
        contact details are the only hard gate in here, a submission with
        zero cards still gets accepted and reviewed by a human
    */
    pub fn validate(&self) -> Result<(), &'static str>{

        if self.first_name.trim().is_empty(){
            return Err(FIRST_NAME_CANT_BE_EMPTY);
        }
        if self.last_name.trim().is_empty(){
            return Err(LAST_NAME_CANT_BE_EMPTY);
        }
        if self.email.trim().is_empty(){
            return Err(EMAIL_CANT_BE_EMPTY);
        }
        if !misc::is_plausible_mailbox(&self.email){
            return Err(INVALID_EMAIL_FORMAT);
        }

        Ok(())
    }

    pub fn customer_name(&self) -> String{
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /* card values arrive as strings straight from the form, an unparseable one counts as zero */
    pub fn total_value(&self) -> f64{
        self.cards
            .iter()
            .map(|card| card.value.trim().parse::<f64>().unwrap_or(0.0))
            .sum()
    }

    /* the payout detail the customer typed for the rail they picked */
    pub fn payout_detail(&self) -> String{

        let detail = match self.payment_method{
            PaymentMethod::Paypal => &self.paypal_address,
            PaymentMethod::Zelle => &self.zelle_details,
            PaymentMethod::Cashapp => &self.cash_app_tag,
            PaymentMethod::Btc => &self.btc_address,
            PaymentMethod::Chime => &self.chime_details,
        };

        let detail = detail.trim();
        if detail.is_empty(){
            NOT_PROVIDED.to_string()
        } else{
            detail.to_string()
        }
    }
}


/*
    the reviewable mongodb document, the submission fields get flattened
    beside the review metadata so the stored doc looks exactly like the
    posted form plus id, referenceNumber, status and submittedAt
*/
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all="camelCase")]
pub struct GiftCardSubmissionRecord{
    pub id: Uuid,
    pub reference_number: String,
    #[serde(flatten)]
    pub submission: GiftCardSubmission,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

impl GiftCardSubmissionRecord{

    pub fn new(submission: GiftCardSubmission) -> Self{
        Self{
            id: Uuid::new_v4(),
            reference_number: misc::gen_reference_number(),
            submission,
            status: UNDER_REVIEW_STATUS.to_string(),
            submitted_at: Utc::now(),
        }
    }

    /*
        the record must be durable before any mail goes out, on a dead or
        missing storage the caller gets the already built 500 response and
        must not notify anyone
    */
    pub async fn save(&self, storage_client: Option<&Client>) -> Result<(), IntakeHttpResponse>{

        let Some(client) = storage_client else{
            let resp = IntakeFailureResponse{
                success: false,
                message: SUBMISSION_FAILED.to_string(),
            };
            return Err(
                Ok(HttpResponse::InternalServerError().json(resp))
            );
        };

        let db_name = std::env::var("DB_NAME").unwrap_or("cashifygcmart".to_string());
        let submissions = client
            .database(&db_name)
            .collection::<GiftCardSubmissionRecord>(GIFT_CARD_SUBMISSIONS_COLLECTION);

        match submissions.insert_one(self, None).await{
            Ok(_) => Ok(()),
            Err(e) => {

                /* custom error handler */
                let error_content = &e.to_string();
                let error_content = error_content.as_bytes().to_vec();
                let error_instance = IntakeError::new(*STORAGE_IO_ERROR_CODE, error_content, ErrorKind::from(e), "GiftCardSubmissionRecord::save");
                error_instance.write().await; /* writes to file and returns the full filled buffer from the error  */

                let resp = IntakeFailureResponse{
                    success: false,
                    message: SUBMISSION_FAILED.to_string(),
                };
                return Err(
                    Ok(HttpResponse::InternalServerError().json(resp))
                );

            }
        }
    }
}


#[cfg(test)]
mod tests{

    use super::*;

    fn sarah_johnson_payload() -> serde_json::Value{
        serde_json::json!({
            "firstName": "Sarah",
            "lastName": "Johnson",
            "email": "sarah.johnson@email.com",
            "phoneNumber": "(555) 123-4567",
            "paymentMethod": "paypal",
            "paypalAddress": "sarah.johnson@paypal.com",
            "cards": [
                {
                    "brand": "Amazon",
                    "value": "100.00",
                    "condition": "like-new",
                    "hasReceipt": "yes",
                    "cardType": "physical",
                    "frontImage": {
                        "data": "data:image/png;base64,aGVsbG8=",
                        "name": "amazon_front.png",
                        "type": "image/png"
                    }
                },
                {
                    "brand": "Steam",
                    "value": "50.5",
                    "condition": "excellent",
                    "hasReceipt": "no",
                    "cardType": "digital",
                    "digitalCode": "STEAM-XYZ-123"
                }
            ]
        })
    }

    #[test]
    fn form_payload_deserializes_field_by_field(){

        let submission = serde_json::from_value::<GiftCardSubmission>(sarah_johnson_payload()).unwrap();

        assert_eq!(submission.first_name, "Sarah");
        assert_eq!(submission.last_name, "Johnson");
        assert_eq!(submission.email, "sarah.johnson@email.com");
        assert_eq!(submission.phone_number, "(555) 123-4567");
        assert_eq!(submission.payment_method, PaymentMethod::Paypal);
        assert_eq!(submission.paypal_address, "sarah.johnson@paypal.com");
        assert_eq!(submission.cards.len(), 2);

        let physical = &submission.cards[0];
        assert_eq!(physical.brand, "Amazon");
        assert_eq!(physical.has_receipt, "yes");
        assert!(physical.has_receipt());
        assert!(!physical.is_digital());
        let front = physical.front_image.as_ref().unwrap();
        assert_eq!(front.name, "amazon_front.png");
        assert_eq!(front.mime, "image/png");
        assert!(front.data.starts_with("data:image/png;base64,"));

        let digital = &submission.cards[1];
        assert_eq!(digital.has_receipt, "no");
        assert!(!digital.has_receipt());
        assert!(digital.is_digital());
        assert_eq!(digital.digital_code, "STEAM-XYZ-123");
        assert_eq!(digital.digital_pin, "");
        assert!(digital.front_image.is_none());
    }

    #[test]
    fn unknown_payout_rails_get_rejected_on_the_wire(){

        let mut payload = sarah_johnson_payload();
        payload["paymentMethod"] = serde_json::json!("venmo");
        assert!(serde_json::from_value::<GiftCardSubmission>(payload).is_err());

        /* the five known rails in their lowercase wire spelling */
        for (wire, label) in [
            ("paypal", "PayPal"),
            ("zelle", "Zelle"),
            ("cashapp", "Cash App"),
            ("btc", "Bitcoin"),
            ("chime", "Chime"),
        ]{
            let method = serde_json::from_value::<PaymentMethod>(serde_json::json!(wire)).unwrap();
            assert_eq!(method.label(), label);
        }
    }

    #[test]
    fn the_cards_key_is_required_but_may_be_empty(){

        /* leaving the key out entirely never reaches validate() */
        let mut payload = sarah_johnson_payload();
        payload.as_object_mut().unwrap().remove("cards");
        assert!(serde_json::from_value::<GiftCardSubmission>(payload).is_err());

        /* an explicit empty list is still a well formed submission */
        let mut payload = sarah_johnson_payload();
        payload["cards"] = serde_json::json!([]);
        let submission = serde_json::from_value::<GiftCardSubmission>(payload).unwrap();
        assert!(submission.cards.is_empty());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn contact_details_are_the_only_hard_gate(){

        let mut submission = serde_json::from_value::<GiftCardSubmission>(sarah_johnson_payload()).unwrap();
        assert!(submission.validate().is_ok());

        /* zero cards is still a reviewable submission */
        submission.cards.clear();
        assert!(submission.validate().is_ok());

        submission.first_name = "   ".to_string();
        assert_eq!(submission.validate(), Err(FIRST_NAME_CANT_BE_EMPTY));

        submission.first_name = "Sarah".to_string();
        submission.last_name = "".to_string();
        assert_eq!(submission.validate(), Err(LAST_NAME_CANT_BE_EMPTY));

        submission.last_name = "Johnson".to_string();
        submission.email = "".to_string();
        assert_eq!(submission.validate(), Err(EMAIL_CANT_BE_EMPTY));

        submission.email = "invalid-email".to_string();
        assert_eq!(submission.validate(), Err(INVALID_EMAIL_FORMAT));
    }

    #[test]
    fn unparseable_card_values_count_as_zero(){

        let submission = GiftCardSubmission{
            cards: vec![
                CardEntry{ value: "100.00".to_string(), ..Default::default() },
                CardEntry{ value: "abc".to_string(), ..Default::default() },
                CardEntry{ value: "50.5".to_string(), ..Default::default() },
            ],
            ..Default::default()
        };
        assert!((submission.total_value() - 150.5).abs() < f64::EPSILON);
    }

    #[test]
    fn payout_detail_follows_the_picked_rail(){

        let submission = GiftCardSubmission{
            payment_method: PaymentMethod::Zelle,
            paypal_address: "ignored@paypal.com".to_string(),
            zelle_details: "sarah@bank.com".to_string(),
            ..Default::default()
        };
        assert_eq!(submission.payout_detail(), "sarah@bank.com");

        let unfilled = GiftCardSubmission{
            payment_method: PaymentMethod::Btc,
            ..Default::default()
        };
        assert_eq!(unfilled.payout_detail(), NOT_PROVIDED);
    }

    #[test]
    fn records_get_stamped_for_review(){

        let submission = serde_json::from_value::<GiftCardSubmission>(sarah_johnson_payload()).unwrap();
        let record = GiftCardSubmissionRecord::new(submission.clone());
        let other = GiftCardSubmissionRecord::new(submission);

        assert!(record.reference_number.starts_with("GC-"));
        assert_eq!(record.status, UNDER_REVIEW_STATUS);
        assert_ne!(record.id, other.id);

        /* the stored doc keeps the posted camelCase keys beside the review metadata */
        let doc = serde_json::to_value(&record).unwrap();
        assert_eq!(doc["firstName"], "Sarah");
        assert_eq!(doc["referenceNumber"].as_str().unwrap(), record.reference_number);
        assert_eq!(doc["status"], "under_review");
        assert!(doc.get("submittedAt").is_some());
        assert!(doc.get("id").is_some());
        assert_eq!(doc["cards"][0]["hasReceipt"], "yes");
        assert_eq!(doc["cards"][0]["frontImage"]["type"], "image/png");
    }

    #[tokio::test]
    async fn detached_storage_means_a_500_and_no_record(){

        let submission = serde_json::from_value::<GiftCardSubmission>(sarah_johnson_payload()).unwrap();
        let record = GiftCardSubmissionRecord::new(submission);

        let saved = record.save(None).await;
        assert!(saved.is_err());
    }
}
