


/*
   -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=
        NOTIFICATION MAIL COMPOSER
   -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=

   rendering is a pure string job over the view models below, no clock
   reads and no randomness in here so composing the same record twice
   always yields byte identical mails
*/


use base64::{engine::general_purpose, Engine as _};
use log::warn;
use mailreq::MailAttachment;
use crate::constants::*;
use crate::misc::titlecase_slug;
use crate::models::gift_cards::{CardEntry, GiftCardSubmissionRecord, ImageUpload};



/* everything the customer facing template needs, precomputed at build time */
#[derive(Clone, Debug)]
pub struct ConfirmationMailView{
    pub customer_name: String,
    pub reference_number: String,
}

#[derive(Clone, Debug)]
pub struct CardRowView{
    pub index: usize,
    pub brand: String,
    pub value: String, // raw form value, rendered with a $ in front
    pub condition: String,
    pub card_type: String,
    pub has_receipt: bool,
    pub is_digital: bool,
    pub digital_code: String,
    pub digital_pin: String,
    pub images: Vec<String>, // which of front/back/receipt came with the card
}

#[derive(Clone, Debug)]
pub struct OperationsMailView{
    pub customer_name: String,
    pub reference_number: String,
    pub email: String,
    pub phone: String,
    pub payment_method: String, // the rail in its shouting form like PAYPAL
    pub payout_detail: String, // like `Zelle: sarah@bank.com` or `Bitcoin: Not provided`
    pub submitted_at: String,
    pub cards: Vec<CardRowView>,
    pub total_value: f64,
}

impl From<&GiftCardSubmissionRecord> for ConfirmationMailView{
    fn from(record: &GiftCardSubmissionRecord) -> ConfirmationMailView{
        ConfirmationMailView{
            customer_name: record.submission.customer_name(),
            reference_number: record.reference_number.clone(),
        }
    }
}

impl From<&GiftCardSubmissionRecord> for OperationsMailView{
    fn from(record: &GiftCardSubmissionRecord) -> OperationsMailView{

        let submission = &record.submission;

        let cards = submission.cards
            .iter()
            .enumerate()
            .map(|(idx, card)|{

                let mut images = Vec::new();
                if card.front_image.is_some(){
                    images.push("front".to_string());
                }
                if card.back_image.is_some(){
                    images.push("back".to_string());
                }
                if card.receipt_image.is_some(){
                    images.push("receipt".to_string());
                }

                CardRowView{
                    index: idx + 1,
                    brand: card.brand.clone(),
                    value: card.value.clone(),
                    condition: titlecase_slug(&card.condition),
                    card_type: titlecase_slug(&card.card_type),
                    has_receipt: card.has_receipt(),
                    is_digital: card.is_digital(),
                    digital_code: card.digital_code.clone(),
                    digital_pin: card.digital_pin.clone(),
                    images,
                }
            })
            .collect::<Vec<CardRowView>>();

        let phone = submission.phone_number.trim();

        OperationsMailView{
            customer_name: submission.customer_name(),
            reference_number: record.reference_number.clone(),
            email: submission.email.clone(),
            phone: if phone.is_empty(){ NOT_PROVIDED.to_string() } else{ phone.to_string() },
            payment_method: submission.payment_method.label().to_uppercase(),
            payout_detail: format!("{}: {}", submission.payment_method.label(), submission.payout_detail()),
            submitted_at: record.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            cards,
            total_value: submission.total_value(),
        }
    }
}


pub fn confirmation_subject(reference_number: &str) -> String{
    format!("{} Submission Status Update - Reference #{}", APP_NAME, reference_number)
}

pub fn operations_subject(view: &OperationsMailView) -> String{
    format!("🚨 NEW SUBMISSION: {} - {}", view.reference_number, view.customer_name)
}


const CONFIRMATION_MAIL_STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            margin: 0;
            padding: 0;
            background-color: #f5f5f5;
        }
        .email-container {
            max-width: 600px;
            margin: 0 auto;
            background-color: #ffffff;
            border-radius: 12px;
            overflow: hidden;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
        .header {
            background: linear-gradient(135deg, #ec4899 0%, #f43f5e 100%);
            color: white;
            padding: 30px 20px;
            text-align: center;
        }
        .header h1 {
            margin: 0;
            font-size: 26px;
            font-weight: 600;
        }
        .content {
            padding: 30px;
        }
        .reference-number {
            background-color: #f8fafc;
            padding: 15px 20px;
            border-radius: 8px;
            margin-bottom: 25px;
            border-left: 4px solid #ec4899;
        }
        .reference-number strong {
            color: #ec4899;
            font-size: 18px;
        }
        .section {
            margin-bottom: 25px;
        }
        .section-title {
            color: #1e40af;
            font-size: 18px;
            font-weight: 600;
            margin-bottom: 15px;
        }
        .important {
            background-color: #fef2f2;
            border: 1px solid #fca5a5;
            padding: 15px;
            border-radius: 8px;
            margin: 20px 0;
        }
        .important strong {
            color: #dc2626;
        }
        .signature {
            margin-top: 30px;
            padding-top: 20px;
            border-top: 1px solid #e5e7eb;
        }
        .contact-info {
            background-color: #f0fdf4;
            padding: 15px;
            border-radius: 8px;
            margin-top: 15px;
        }
        .footer {
            background-color: #f9fafb;
            padding: 20px;
            text-align: center;
            color: #6b7280;
            font-size: 14px;
        }
"#;

pub fn render_confirmation_mail(view: &ConfirmationMailView) -> String{

    format!(
r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Gift Card Submission Confirmation</title>
    <style>{style}    </style>
</head>
<body>
    <div class="email-container">
        <div class="header">
            <h1>Thank You for Your Submission, {customer_name}</h1>
        </div>

        <div class="content">
            <div class="reference-number">
                <strong>Reference Number: {reference_number}</strong><br>
                <strong>Current Status: Under review</strong>
            </div>

            <p>Our operations team is now verifying the details you provided to ensure the card meets our acceptance and fraud-prevention standards. This helps us protect both buyers and sellers and ensures smooth, accurate payouts.</p>

            <div class="section">
                <h2 class="section-title">📌 Next Steps</h2>
                <ul>
                    <li><strong>Status update:</strong> You'll receive an email from {support_mail} within 14 hours with the outcome or a request for additional information.</li>
                    <li><strong>If approved:</strong> We'll include redemption instructions and the expected payout timeline in the follow-up email.</li>
                    <li><strong>If we need more info:</strong> We'll contact you within 8 hours to request photos or clarifications, please reply promptly to avoid delays.</li>
                </ul>
            </div>

            <div class="important">
                <strong>Important:</strong> Please do not use or redeem the gift card while it's under review.
            </div>

            <div class="section">
                <h2 class="section-title">📝 Submission Guidelines &amp; Processing</h2>
                <ul>
                    <li><strong>Eligible cards:</strong> Only cards listed in our Rate Calculator are accepted.</li>
                    <li><strong>Minimum value:</strong> $50 per card.</li>
                    <li><strong>Processing windows:</strong> Submissions received after 8:00 PM EST will be processed the following business day. Submissions received on Sundays will be processed on the next business day.</li>
                    <li><strong>Processing time:</strong> Can vary depending on demand and the card type. The quoted timelines above are typical but not guaranteed.</li>
                    <li><strong>Unlisted cards:</strong> Please contact support before submitting if a card brand is not shown in the Rate Calculator.</li>
                </ul>

                <p><em>Disclaimer: cashifygcmart.com is not responsible for any balance discrepancies on cards not listed in our accepted inventory.</em></p>
            </div>

            <p>If you have questions or need to provide additional documentation, reply to this email or contact us at {support_mail}. Please include your reference number <strong>{reference_number}</strong> in all correspondence for fastest service.</p>

            <p>Thank you for choosing cashifygcmart.com.</p>

            <div class="signature">
                <p>Best regards,<br>
                <strong>Robert Smith</strong><br>
                Customer Support Manager</p>

                <div class="contact-info">
                    <p>📧 {support_mail}</p>
                    <p>🌐 https://www.cashifygcmart.com</p>
                </div>
            </div>
        </div>

        <div class="footer">
            <p>&copy; 2025 Cashifygcmart. All rights reserved.</p>
            <p>Please add {support_mail} to your contacts to ensure our emails reach your inbox.</p>
        </div>
    </div>
</body>
</html>
"#,
        style = CONFIRMATION_MAIL_STYLE,
        customer_name = view.customer_name,
        reference_number = view.reference_number,
        support_mail = SUPPORT_MAIL
    )
}


const OPERATIONS_MAIL_STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            margin: 0;
            padding: 0;
            background-color: #f5f5f5;
        }
        .email-container {
            max-width: 800px;
            margin: 0 auto;
            background-color: #ffffff;
            border-radius: 12px;
            overflow: hidden;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
        .header {
            background: linear-gradient(135deg, #1e40af 0%, #3b82f6 100%);
            color: white;
            padding: 30px 20px;
            text-align: center;
        }
        .header h1 {
            margin: 0;
            font-size: 26px;
            font-weight: 600;
        }
        .content {
            padding: 30px;
        }
        .reference-number {
            background-color: #dbeafe;
            padding: 15px 20px;
            border-radius: 8px;
            margin-bottom: 25px;
            border-left: 4px solid #3b82f6;
            text-align: center;
        }
        .reference-number strong {
            color: #1e40af;
            font-size: 18px;
        }
        .section {
            margin-bottom: 25px;
        }
        .section-title {
            color: #1e40af;
            font-size: 18px;
            font-weight: 600;
            margin-bottom: 15px;
        }
        .customer-info {
            background-color: #f8fafc;
            padding: 20px;
            border-radius: 8px;
            margin-bottom: 20px;
        }
        .customer-info table {
            width: 100%;
            border-collapse: collapse;
        }
        .customer-info td {
            padding: 8px 12px;
            border-bottom: 1px solid #e5e7eb;
        }
        .customer-info td:first-child {
            font-weight: 600;
            width: 30%;
            color: #374151;
        }
        .cards-table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 15px;
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            overflow: hidden;
        }
        .cards-table th {
            background-color: #f3f4f6;
            padding: 12px;
            text-align: left;
            font-weight: 600;
            color: #374151;
            border-bottom: 2px solid #e5e7eb;
        }
        .urgent {
            background-color: #fef2f2;
            border: 1px solid #fca5a5;
            padding: 15px;
            border-radius: 8px;
            margin: 20px 0;
        }
        .urgent strong {
            color: #dc2626;
        }
        .footer {
            background-color: #f9fafb;
            padding: 20px;
            text-align: center;
            color: #6b7280;
            font-size: 14px;
        }
"#;

pub fn render_operations_mail(view: &OperationsMailView) -> String{

    let cards_rows = view.cards
        .iter()
        .map(render_card_row)
        .collect::<String>();

    format!(
r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New Gift Card Submission</title>
    <style>{style}    </style>
</head>
<body>
    <div class="email-container">
        <div class="header">
            <h1>🚨 NEW GIFT CARD SUBMISSION</h1>
        </div>

        <div class="content">
            <div class="reference-number">
                <strong>Reference Number: {reference_number}</strong><br>
                <span style="font-size: 14px; color: #6b7280;">Submitted: {submitted_at}</span>
            </div>

            <div class="urgent">
                <strong>⏰ ACTION REQUIRED:</strong> New gift card submission received and requires verification within 14 hours.
            </div>

            <div class="section">
                <h2 class="section-title">👤 Customer Information</h2>
                <div class="customer-info">
                    <table>
                        <tr>
                            <td><strong>Name:</strong></td>
                            <td>{customer_name}</td>
                        </tr>
                        <tr>
                            <td><strong>Email:</strong></td>
                            <td><a href="mailto:{email}">{email}</a></td>
                        </tr>
                        <tr>
                            <td><strong>Phone:</strong></td>
                            <td>{phone}</td>
                        </tr>
                        <tr>
                            <td><strong>Payment Method:</strong></td>
                            <td>{payment_method}</td>
                        </tr>
                        <tr>
                            <td><strong>Payout:</strong></td>
                            <td>{payout_detail}</td>
                        </tr>
                    </table>
                </div>
            </div>

            <div class="section">
                <h2 class="section-title">💳 Gift Card Details</h2>
                <table class="cards-table">
                    <thead>
                        <tr>
                            <th>#</th>
                            <th>Brand</th>
                            <th>Value</th>
                            <th>Condition</th>
                            <th>Receipt</th>
                            <th>Type</th>
                            <th>Images</th>
                        </tr>
                    </thead>
                    <tbody>
{cards_rows}                    </tbody>
                </table>

                <div style="margin-top: 15px; padding: 15px; background-color: #ecfdf5; border-radius: 8px;">
                    <strong style="color: #065f46;">Total Submission Value: ${total_value:.2}</strong>
                </div>
            </div>

            <div class="section">
                <h2 class="section-title">🔍 Next Actions Required</h2>
                <ol>
                    <li><strong>Verify gift card details</strong> - Check brand, value, and condition</li>
                    <li><strong>Review payment information</strong> - Confirm payout method details</li>
                    <li><strong>Process images</strong> - Verify uploaded card/receipt images</li>
                    <li><strong>Send status update</strong> - Respond within 14 hours timeline</li>
                    <li><strong>Update customer</strong> - Use reference number {reference_number}</li>
                </ol>
            </div>

            <div style="text-align: center; margin-top: 30px;">
                <p style="color: #6b7280; font-size: 14px;">
                    Customer confirmation email sent to: <strong>{email}</strong><br>
                    Customer Reference: <strong>{reference_number}</strong>
                </p>
            </div>
        </div>

        <div class="footer">
            <p>&copy; 2025 Cashifygcmart Operations Team</p>
            <p>This is an automated notification for new gift card submissions.</p>
        </div>
    </div>
</body>
</html>
"#,
        style = OPERATIONS_MAIL_STYLE,
        reference_number = view.reference_number,
        submitted_at = view.submitted_at,
        customer_name = view.customer_name,
        email = view.email,
        phone = view.phone,
        payment_method = view.payment_method,
        payout_detail = view.payout_detail,
        cards_rows = cards_rows,
        total_value = view.total_value
    )
}

fn render_card_row(card: &CardRowView) -> String{

    let receipt = if card.has_receipt{ "✅ Yes" } else{ "❌ No" };
    let images = if card.images.is_empty(){ "-".to_string() } else{ card.images.join(", ") };

    let mut row = format!(
r#"                        <tr style="border-bottom: 1px solid #e5e7eb;">
                            <td style="padding: 12px; text-align: left;">{index}</td>
                            <td style="padding: 12px; text-align: left;"><strong>{brand}</strong></td>
                            <td style="padding: 12px; text-align: left;">${value}</td>
                            <td style="padding: 12px; text-align: left;">{condition}</td>
                            <td style="padding: 12px; text-align: left;">{receipt}</td>
                            <td style="padding: 12px; text-align: left;">{card_type}</td>
                            <td style="padding: 12px; text-align: left;">{images}</td>
                        </tr>
"#,
        index = card.index,
        brand = card.brand,
        value = card.value,
        condition = card.condition,
        receipt = receipt,
        card_type = card.card_type,
        images = images
    );

    /* digital cards carry their redemption secrets right under the row */
    if card.is_digital{
        let digital_code = if card.digital_code.is_empty(){ "N/A" } else{ card.digital_code.as_str() };
        let digital_pin = if card.digital_pin.is_empty(){ NOT_PROVIDED } else{ card.digital_pin.as_str() };
        row.push_str(
            &format!(
r#"                        <tr style="border-bottom: 1px solid #e5e7eb;">
                            <td></td>
                            <td colspan="6" style="padding: 12px; text-align: left; color: #374151;">Digital Code: {digital_code} | Digital PIN: {digital_pin}</td>
                        </tr>
"#,
                digital_code = digital_code,
                digital_pin = digital_pin
            )
        );
    }

    row
}


/*
    one attachment per uploaded image, named by card index and role so the
    operations inbox sorts them next to the table rows
*/
pub fn collect_attachments(cards: &[CardEntry]) -> Vec<MailAttachment>{

    let mut attachments = Vec::new();

    for (idx, card) in cards.iter().enumerate(){

        let roles: [(&str, &Option<ImageUpload>); 3] = [
            ("front", &card.front_image),
            ("back", &card.back_image),
            ("receipt", &card.receipt_image),
        ];

        for (role, image) in roles{

            let Some(image) = image else{
                continue;
            };

            match decode_image_payload(&image.data){
                Ok(bytes) => {
                    attachments.push(
                        MailAttachment{
                            filename: format!("card{}_{}_{}", idx + 1, role, sanitize_filename::sanitize(&image.name)),
                            mime: image.mime.clone(),
                            bytes,
                        }
                    );
                },
                Err(decode_error) => {
                    warn!("🖼️ skipping undecodable {} image on card {} - {}", role, idx + 1, decode_error);
                }
            }
        }
    }

    attachments
}

/* the form ships images as data urls, the raw base64 tail is all we want */
fn decode_image_payload(data: &str) -> Result<Vec<u8>, base64::DecodeError>{

    let payload = match data.split_once(";base64,"){
        Some((_, tail)) => tail,
        None => data,
    };

    general_purpose::STANDARD.decode(payload.trim())
}


#[cfg(test)]
mod tests{

    use chrono::TimeZone;
    use uuid::Uuid;
    use crate::models::gift_cards::{GiftCardSubmission, PaymentMethod};
    use super::*;

    fn reviewed_record() -> GiftCardSubmissionRecord{

        let submission = GiftCardSubmission{
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone_number: "(555) 123-4567".to_string(),
            payment_method: PaymentMethod::Zelle,
            zelle_details: "sarah@bank.com".to_string(),
            cards: vec![
                CardEntry{
                    brand: "Amazon".to_string(),
                    value: "100.00".to_string(),
                    condition: "like-new".to_string(),
                    has_receipt: "yes".to_string(),
                    card_type: "physical".to_string(),
                    front_image: Some(ImageUpload{
                        data: "data:image/png;base64,aGVsbG8=".to_string(),
                        name: "amazon_front.png".to_string(),
                        mime: "image/png".to_string(),
                    }),
                    ..Default::default()
                },
                CardEntry{
                    brand: "Target".to_string(),
                    value: "abc".to_string(),
                    condition: "good".to_string(),
                    has_receipt: "no".to_string(),
                    card_type: "physical".to_string(),
                    ..Default::default()
                },
                CardEntry{
                    brand: "Steam".to_string(),
                    value: "50.5".to_string(),
                    condition: "excellent".to_string(),
                    has_receipt: "no".to_string(),
                    card_type: "digital".to_string(),
                    digital_code: "STEAM-XYZ-123".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        GiftCardSubmissionRecord{
            id: Uuid::nil(),
            reference_number: "GC-143022-47".to_string(),
            submission,
            status: UNDER_REVIEW_STATUS.to_string(),
            submitted_at: chrono::Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 22).unwrap(),
        }
    }

    #[test]
    fn unparseable_values_sum_as_zero_in_the_total(){

        let record = reviewed_record();
        let view = OperationsMailView::from(&record);
        assert!((view.total_value - 150.5).abs() < f64::EPSILON);

        let operations_mail = render_operations_mail(&view);
        assert!(operations_mail.contains("Total Submission Value: $150.50"));
    }

    #[test]
    fn payout_block_follows_the_picked_rail(){

        let record = reviewed_record();
        let view = OperationsMailView::from(&record);
        assert_eq!(view.payment_method, "ZELLE");
        assert_eq!(view.payout_detail, "Zelle: sarah@bank.com");

        let operations_mail = render_operations_mail(&view);
        assert!(operations_mail.contains("Zelle: sarah@bank.com"));
        assert!(!operations_mail.contains("PayPal:"));

        let mut unfilled = reviewed_record();
        unfilled.submission.payment_method = PaymentMethod::Btc;
        let unfilled_view = OperationsMailView::from(&unfilled);
        assert_eq!(unfilled_view.payout_detail, "Bitcoin: Not provided");
    }

    #[test]
    fn rendering_the_same_view_twice_is_byte_identical(){

        let record = reviewed_record();

        let confirmation_view = ConfirmationMailView::from(&record);
        assert_eq!(
            render_confirmation_mail(&confirmation_view),
            render_confirmation_mail(&confirmation_view)
        );

        let operations_view = OperationsMailView::from(&record);
        assert_eq!(
            render_operations_mail(&operations_view),
            render_operations_mail(&operations_view)
        );
    }

    #[test]
    fn confirmation_mail_keeps_the_review_promises(){

        let record = reviewed_record();
        let view = ConfirmationMailView::from(&record);
        let confirmation_mail = render_confirmation_mail(&view);

        assert!(confirmation_mail.contains("Thank You for Your Submission, Sarah Johnson"));
        assert!(confirmation_mail.contains("Reference Number: GC-143022-47"));
        assert!(confirmation_mail.contains("Current Status: Under review"));
        assert!(confirmation_mail.contains("within 14 hours"));
        assert!(confirmation_mail.contains("support@cashifygcmart.com"));
        assert!(confirmation_mail.contains("do not use or redeem the gift card"));
        assert!(confirmation_mail.contains("$50 per card"));
        assert!(confirmation_mail.contains("8:00 PM EST"));
        assert!(confirmation_mail.contains("Robert Smith"));

        assert_eq!(
            confirmation_subject("GC-143022-47"),
            "Cashifygcmart Submission Status Update - Reference #GC-143022-47"
        );
    }

    #[test]
    fn operations_table_renders_receipt_type_and_image_flags(){

        let record = reviewed_record();
        let view = OperationsMailView::from(&record);
        let operations_mail = render_operations_mail(&view);

        assert!(operations_mail.contains("Like New"));
        assert!(operations_mail.contains("✅ Yes"));
        assert!(operations_mail.contains("❌ No"));
        assert!(operations_mail.contains("Physical"));
        assert!(operations_mail.contains("Digital Code: STEAM-XYZ-123 | Digital PIN: Not provided"));
        assert!(operations_mail.contains(">front<"));
        assert!(operations_mail.contains(">-<"));
        assert!(operations_mail.contains("(555) 123-4567"));

        assert_eq!(
            operations_subject(&view),
            "🚨 NEW SUBMISSION: GC-143022-47 - Sarah Johnson"
        );
    }

    #[test]
    fn attachments_get_decoded_named_and_typed(){

        let record = reviewed_record();
        let attachments = collect_attachments(&record.submission.cards);

        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].filename, "card1_front_amazon_front.png");
        assert_eq!(attachments[0].mime, "image/png");
        assert_eq!(attachments[0].bytes, b"hello");
    }

    #[test]
    fn bare_base64_payloads_decode_too(){

        let cards = vec![
            CardEntry{
                back_image: Some(ImageUpload{
                    data: "aGVsbG8=".to_string(),
                    name: "back.jpg".to_string(),
                    mime: "image/jpeg".to_string(),
                }),
                ..Default::default()
            },
        ];

        let attachments = collect_attachments(&cards);
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].filename, "card1_back_back.jpg");
        assert_eq!(attachments[0].bytes, b"hello");
    }

    #[test]
    fn undecodable_payloads_get_skipped_not_raised(){

        let cards = vec![
            CardEntry{
                front_image: Some(ImageUpload{
                    data: "!!!not-base64!!!".to_string(),
                    name: "broken.png".to_string(),
                    mime: "image/png".to_string(),
                }),
                receipt_image: Some(ImageUpload{
                    data: "data:image/png;base64,aGVsbG8=".to_string(),
                    name: "receipt.png".to_string(),
                    mime: "image/png".to_string(),
                }),
                ..Default::default()
            },
        ];

        let attachments = collect_attachments(&cards);
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].filename, "card1_receipt_receipt.png");
    }
}
