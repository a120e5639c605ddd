


/*

    the intake surface is small on purpose, one service for the
    submission flow itself and one for the liveness and status
    probes, both get mounted under the /api scope by the server
    macro

*/



use actix_web::web;
use crate::apis;



/*
     --------------------------------
    |      REGISTER INTAKE ROUTES
    | -------------------------------
    |
    |

*/
pub fn init_intake(config: &mut web::ServiceConfig){

    config.service(apis::intake::exports::submit_gift_card);

    // other routs maybe ?
    // ...


}

/*
     --------------------------------
    |      REGISTER HEALTH ROUTES
    | -------------------------------
    |
    |

*/
pub fn init_health(config: &mut web::ServiceConfig){

    config.service(apis::health::exports::index);
    config.service(apis::health::exports::create_status_check);
    config.service(apis::health::exports::get_status_checks);

    // other routs maybe ?
    // ...


}
