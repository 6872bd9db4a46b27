use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactNotificationTemplate("contact_notification.txt"),
    ContactConfirmationTemplate("contact_confirmation.txt"),
    ReferralNotificationTemplate("referral_notification.txt"),
    ReferralConfirmationTemplate("referral_confirmation.txt"),
}

/// Internal notification about a new contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactNotificationTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    /// The website as entered by the submitter.
    pub website: Option<String>,
    pub message_lines: Vec<String>,
}

/// Confirmation sent to the submitter of a contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactConfirmationTemplate {
    pub greeting: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub message_lines: Vec<String>,
    pub inbox: String,
    pub brand: String,
}

/// Internal notification about a new referral partner inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferralNotificationTemplate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Confirmation sent to a prospective referral partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferralConfirmationTemplate {
    pub greeting: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub brand: String,
}
