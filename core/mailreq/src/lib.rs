


use async_trait::async_trait;
use lettre::{
    message::{header::ContentType as LettreContentType, Attachment as LettreAttachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message as LettreMessage,
    Tokio1Executor,
};
use log::{error, info};
use serde::{Serialize, Deserialize};


/*  ----------------------------
   | notification mail channel
   |----------------------------
   | smtp through lettre relay
   | console for smtp-less runs
   |
*/


#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MailAttachment{
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(thiserror::Error, Debug)]
pub enum MailError{
    #[error("invalid mailbox address: {0}")]
    Mailbox(#[from] lettre::address::AddressError),
    #[error("mail message can't be built: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("unknown attachment content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),
    #[error("smtp transport failure: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/*
    the channel contract: hand over one html mail with its attachments and
    report back whether it went out, every failure must stay inside the
    channel (logged) cause senders never want to fail their own flow over
    a mail hiccup
*/
#[async_trait]
pub trait Mailer{
    async fn send(&self, to: &str, subject: &str, html_body: &str, attachments: Vec<MailAttachment>) -> bool;
}

#[derive(Clone)]
pub struct SmtpMailer{
    pub from: Mailbox,
    pub transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer{

    pub fn from_env(app_name: &str) -> Result<SmtpMailer, MailError>{

        /*
            empty smtp vars simply fail the relay or mailbox parsing in here
            which sends the caller to the console channel instead of panicking
        */
        let smtp_username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        let smtp_password = std::env::var("SMTP_PASSWORD").unwrap_or_default();
        let smtp_server = std::env::var("SMTP_SERVER").unwrap_or_default();
        let smtp_creds = Credentials::new(smtp_username.clone(), smtp_password);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server.as_str())?
            .credentials(smtp_creds)
            .build();

        let from = format!("{} <{}>", app_name, smtp_username).parse::<Mailbox>()?;

        Ok(
            SmtpMailer{
                from,
                transport
            }
        )
    }

    fn build_message(&self, to: Mailbox, subject: &str, html_body: &str, attachments: Vec<MailAttachment>) -> Result<LettreMessage, MailError>{

        let mut multipart = MultiPart::mixed()
            .singlepart(
                SinglePart::builder()
                    .header(LettreContentType::TEXT_HTML)
                    .body(html_body.to_string())
            );

        for attachment in attachments{
            let content_type = LettreContentType::parse(&attachment.mime)
                .or(LettreContentType::parse("application/octet-stream"))?;
            multipart = multipart.singlepart(
                LettreAttachment::new(attachment.filename).body(attachment.bytes, content_type)
            );
        }

        let email = LettreMessage::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .multipart(multipart)?;

        Ok(email)
    }

}

#[async_trait]
impl Mailer for SmtpMailer{

    async fn send(&self, to: &str, subject: &str, html_body: &str, attachments: Vec<MailAttachment>) -> bool{

        let to_mailbox = match to.parse::<Mailbox>(){
            Ok(mailbox) => mailbox,
            Err(e) => {
                error!("📧 invalid receiver mail address [{}] - {}", to, e);
                return false;
            }
        };

        let email = match self.build_message(to_mailbox, subject, html_body, attachments){
            Ok(email) => email,
            Err(e) => {
                error!("📧 can't build mail message for [{}] - {}", to, e);
                return false;
            }
        };

        match self.transport.send(email).await{
            Ok(_) => {
                info!("📧 mail has been sent to [{}]", to);
                true
            },
            Err(e) => {
                error!("📧 can't send mail to [{}] - {}", to, e);
                false
            }
        }
    }

}

/* logs instead of relaying, the whole mail flow stays observable without an smtp server */
pub struct ConsoleMailer;

#[async_trait]
impl Mailer for ConsoleMailer{

    async fn send(&self, to: &str, subject: &str, html_body: &str, attachments: Vec<MailAttachment>) -> bool{

        info!("📧 [console mail] to: [{}] | subject: [{}] | body bytes: [{}] | attachments: [{}]",
            to, subject, html_body.len(), attachments.len());
        for attachment in &attachments{
            info!("📎 [console mail] attachment: [{}] | mime: [{}] | bytes: [{}]",
                attachment.filename, attachment.mime, attachment.bytes.len());
        }
        true
    }

}

/* the backend gets picked once at boot, everybody else only sees the trait object */
pub fn from_env(app_name: &str) -> Box<dyn Mailer + Send + Sync + 'static>{

    let mail_backend = std::env::var("MAIL_BACKEND").unwrap_or("smtp".to_string());
    match mail_backend.as_str(){
        "console" => Box::new(ConsoleMailer),
        _ => {
            match SmtpMailer::from_env(app_name){
                Ok(smtp_mailer) => Box::new(smtp_mailer),
                Err(e) => {
                    error!("📧 can't build smtp mailer, switching to the console channel - {}", e);
                    Box::new(ConsoleMailer)
                }
            }
        }
    }
}


#[cfg(test)]
mod tests{

    use super::*;

    #[tokio::test]
    async fn console_channel_always_reports_success(){

        let mailer = ConsoleMailer;
        let attachments = vec![
            MailAttachment{
                filename: "card1_front_sample.png".to_string(),
                mime: "image/png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }
        ];
        assert!(mailer.send("seller@example.com", "hello", "<p>hi</p>", attachments).await);
    }

    #[tokio::test]
    async fn env_picker_hands_out_console_backend(){

        std::env::set_var("MAIL_BACKEND", "console");
        let mailer = from_env("Cashifygcmart");
        assert!(mailer.send("seller@example.com", "hello", "<p>hi</p>", vec![]).await);
        std::env::remove_var("MAIL_BACKEND");
    }

    #[test]
    fn smtp_messages_carry_html_and_attachments_as_multipart(){

        std::env::set_var("SMTP_USERNAME", "notifier@cashifygcmart.com");
        std::env::set_var("SMTP_PASSWORD", "sekret");
        std::env::set_var("SMTP_SERVER", "smtp.example.com");

        let mailer = SmtpMailer::from_env("Cashifygcmart").unwrap();
        let attachments = vec![
            MailAttachment{
                filename: "card1_front_receipt.png".to_string(),
                mime: "image/png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }
        ];
        let message = mailer
            .build_message("seller@example.com".parse().unwrap(), "hello", "<p>hi</p>", attachments)
            .unwrap();

        /* formatting the message needs no relay, the body and every attachment must land in one multipart */
        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("multipart/mixed"));
        assert!(formatted.contains("text/html"));
        assert!(formatted.contains("card1_front_receipt.png"));
        assert!(formatted.contains("image/png"));

        std::env::remove_var("SMTP_USERNAME");
        std::env::remove_var("SMTP_PASSWORD");
        std::env::remove_var("SMTP_SERVER");
    }

}
