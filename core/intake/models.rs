


/*  > ---------------------------------------------------------------------------------------------
    | every model method that touches mongodb returns Result<Data, IntakeHttpResponse> so
    | the api can early return the already built error response on the Err side without
    | rebuilding it per call site.
    |
    |   gift_cards    ---> documents of the mongodb gift_card_submissions collection
    |   status_checks ---> documents of the mongodb status_checks collection
    |
*/

pub mod gift_cards;
pub mod status_checks;
