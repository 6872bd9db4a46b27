use std::sync::LazyLock;

use agency_models::referral::ReferralForm;

pub static REFERRAL_FORM: LazyLock<ReferralForm> = LazyLock::new(|| ReferralForm {
    name: "Sam Partner".into(),
    email: "sam@partner.example".into(),
    phone: Some("+1 555 0100".into()),
    message: "I run a design studio\nand often get development requests.".into(),
});
