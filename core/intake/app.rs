


use std::env;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{App, Error, web, web::Data, http::header,
                HttpRequest, HttpServer, Responder, HttpResponse,
                get, post};
use actix_web::middleware::Logger;
use env_logger::Env;
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use log::{info, error};
use mongodb::Client;
use chrono::Utc;
use dotenv::dotenv;
use futures::TryStreamExt; /* is required to call the try_next() method on the mongodb cursors */
use constants::IntakeHttpResponse;

mod apis;
mod misc;
mod constants;
mod config;
mod services;
mod models;
mod templates;
mod error;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {


    let server = server!
    {
        /* SERVER CONFIGS */
    };

    server


}
