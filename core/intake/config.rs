


use serde::{Serialize, Deserialize};
use crate::constants::OPERATIONS_MAIL_FALLBACK;


#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Env{
    pub HOST: String,
    pub INTAKE_PORT: String,
    pub ENVIRONMENT: String,
    pub DB_HOST: String,
    pub DB_PORT: String,
    pub DB_USERNAME: String,
    pub DB_PASSWORD: String,
    pub DB_ENGINE: String,
    pub DB_NAME: String,
    pub SMTP_USERNAME: String,
    pub SMTP_PASSWORD: String,
    pub SMTP_SERVER: String,
    pub OPERATIONS_MAIL: String,
    pub MAIL_BACKEND: String,
    pub CORS_ORIGINS: String,
}


#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Context<C>{
    pub vars: C

}
pub trait EnvExt{

    type Context;
    fn get_vars(&self) -> Self::Context;
}

impl EnvExt for Env{

    type Context = Context<Self>;

    fn get_vars(&self) -> Self::Context {

        let ctx = Context::<Env>{
            vars: Env{
                HOST: std::env::var("HOST").unwrap(),
                INTAKE_PORT: std::env::var("INTAKE_PORT").unwrap(),
                ENVIRONMENT: std::env::var("ENVIRONMENT").unwrap(),
                DB_HOST: std::env::var("DB_HOST").unwrap(),
                DB_PORT: std::env::var("DB_PORT").unwrap(),
                DB_USERNAME: std::env::var("DB_USERNAME").unwrap(),
                DB_PASSWORD: std::env::var("DB_PASSWORD").unwrap(),
                DB_ENGINE: std::env::var("DB_ENGINE").unwrap(),
                DB_NAME: std::env::var("DB_NAME").unwrap(),
                SMTP_USERNAME: std::env::var("SMTP_USERNAME").unwrap_or_default(),
                SMTP_PASSWORD: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
                SMTP_SERVER: std::env::var("SMTP_SERVER").unwrap_or_default(),
                OPERATIONS_MAIL: std::env::var("OPERATIONS_MAIL").unwrap_or(OPERATIONS_MAIL_FALLBACK.to_string()),
                MAIL_BACKEND: std::env::var("MAIL_BACKEND").unwrap_or("smtp".to_string()),
                CORS_ORIGINS: std::env::var("CORS_ORIGINS").unwrap_or("*".to_string()),
            }
        };

        ctx

    }
}
