//! Branding of the Connected App.
//!
//! All product naming sent to Salesforce comes from [`Branding`]. The
//! defaults describe the Fuse integration app; a deployment can supply its
//! own values as JSON.

use serde::{Deserialize, Serialize};

pub const CLIENT_ID: &str = "JBoss Fuse";
pub const CONNECTED_APP_NAME: &str = "FuseApp";
pub const CONTACT_EMAIL: &str = "support@redhat.com";
pub const APP_DESCRIPTION: &str =
    "Salesforce Connected App used for integration with RedHat Fuse middleware.";
pub const INFO_URL: &str = "https://www.redhat.com/en/technologies/jboss-middleware/fuse";
pub const CALLBACK_URL: &str = "https://login.salesforce.com/services/oauth2/success";

/// Static description of the Connected App and of the calling client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    /// Sent as `CallOptions/client` on every call.
    pub client_id: String,
    /// `fullName` and `label` of the Connected App.
    pub app_name: String,
    pub contact_email: String,
    pub description: String,
    pub info_url: String,
    /// OAuth callback URL registered on the app.
    pub callback_url: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            client_id: CLIENT_ID.to_string(),
            app_name: CONNECTED_APP_NAME.to_string(),
            contact_email: CONTACT_EMAIL.to_string(),
            description: APP_DESCRIPTION.to_string(),
            info_url: INFO_URL.to_string(),
            callback_url: CALLBACK_URL.to_string(),
        }
    }
}
