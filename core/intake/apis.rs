


/*  > ---------------------------------------------------------------------------------------------
    | every api in here returns Result<actix_web::HttpResponse, actix_web::Error>, the body is
    | built by the resp!{} macro from a flat serializable struct so the frontend never has to
    | unwrap an envelope.
    |
    |   intake ---> the gift card submission flow itself
    |   health ---> liveness and status check probes
    |
*/

pub mod intake;
pub mod health;
