


/* ------------------------------- */
/*    utility box for the intake   */
/* ------------------------------- */


use rand::Rng;
use serde::{Serialize, Deserialize};


/*
    the failure body every api speaks when it can't do its job, the
    frontend only ever looks at these two fields on a non 200 status
*/
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IntakeFailureResponse{
    pub success: bool,
    pub message: String,
}


/*
    every response body in this app is a flat serializable struct, the
    macro just binds it to the passed in status code then early returns
    the built actix response from the api
*/
#[macro_export]
macro_rules! resp {
    (
        $body_type:ty,
        $body:expr,
        $code:expr,
    ) => {

        {
            use actix_web::HttpResponse;

            let body: $body_type = $body;
            let resp = HttpResponse::build($code)
                .json(
                    body
                );

            return Ok(resp);
        }
    }
}


pub fn gen_random_number(from: u32, to: u32) -> u32{
    let mut rng = rand::thread_rng(); // we can't share this between threads and across .awaits
    rng.gen_range(from..to)
}

/*
    the public tracking handle stamped on every submission, the wall clock
    part keeps it greppable in support threads and the random tail keeps two
    submissions within the same second apart, like GC-143022-47
*/
pub fn gen_reference_number() -> String{
    let timestamp = chrono::Local::now().format("%H%M%S").to_string();
    let random_tail = gen_random_number(10, 100);
    format!("GC-{}-{}", timestamp, random_tail)
}

/* one @ with a non empty local part and a dotted domain, nothing fancier */
pub fn is_plausible_mailbox(mail: &str) -> bool{
    let mail = mail.trim();
    let mut parts = mail.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else{
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
}

/* form slugs like `like-new` get rendered as `Like New` in the operations mail */
pub fn titlecase_slug(slug: &str) -> String{
    slug
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word|{
            let mut chars = word.chars();
            match chars.next(){
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}


#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn reference_numbers_keep_the_public_shape(){
        for _ in 0..64{
            let reference = gen_reference_number();
            let parts = reference.split('-').collect::<Vec<&str>>();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "GC");
            assert_eq!(parts[1].len(), 6);
            assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(parts[2].len(), 2);
            assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn random_tail_stays_in_range(){
        for _ in 0..256{
            let tail = gen_random_number(10, 100);
            assert!(tail >= 10 && tail < 100);
        }
    }

    #[test]
    fn mailbox_shapes_get_checked(){
        assert!(is_plausible_mailbox("sarah.johnson@email.com"));
        assert!(is_plausible_mailbox("s@example.com"));
        assert!(is_plausible_mailbox("  padded@example.com  "));
        assert!(!is_plausible_mailbox("invalid-email"));
        assert!(!is_plausible_mailbox("someone@nodot"));
        assert!(!is_plausible_mailbox("@example.com"));
        assert!(!is_plausible_mailbox("two@@example.com"));
        assert!(!is_plausible_mailbox("dot@.example.com"));
        assert!(!is_plausible_mailbox(""));
    }

    #[test]
    fn slugs_render_title_cased(){
        assert_eq!(titlecase_slug("like-new"), "Like New");
        assert_eq!(titlecase_slug("slightly-used"), "Slightly Used");
        assert_eq!(titlecase_slug("excellent"), "Excellent");
        assert_eq!(titlecase_slug("digital"), "Digital");
        assert_eq!(titlecase_slug(""), "");
    }
}
