use agency_api_rest::RestServer as RestServerImpl;
use agency_core_contact_impl::ContactFeatureServiceImpl;
use agency_core_referral_impl::ReferralFeatureServiceImpl;
use agency_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use agency_extern_impl::{
    audience::AudienceApiServiceImpl, bot_detection::BotDetectionApiServiceImpl,
    leads::LeadsApiServiceImpl,
};
use agency_shared_impl::bot::BotCheckServiceImpl;
use agency_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = RestServerImpl<ContactFeature, ReferralFeature>;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Templates
pub type Template = TemplateServiceImpl;

// Extern
pub type AudienceApi = AudienceApiServiceImpl;
pub type BotDetectionApi = BotDetectionApiServiceImpl;
pub type LeadsApi = LeadsApiServiceImpl;

// Shared
pub type BotCheck = BotCheckServiceImpl<BotDetectionApi>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<BotCheck, TemplateEmail, AudienceApi, LeadsApi>;
pub type ReferralFeature = ReferralFeatureServiceImpl<BotCheck, TemplateEmail>;
