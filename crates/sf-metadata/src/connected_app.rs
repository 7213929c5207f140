//! Connected App lifecycle: list, delete, create.
//!
//! [`ConnectedAppManager::create_connected_app`] runs the sequence
//!
//! ```text
//! Idle -> Listing -> (Deleting ->) Creating -> Done
//!            \            \             \
//!             +------------+-------------+--> Failed
//! ```
//!
//! Each step waits for the previous one; the first failure ends the run and
//! is returned unchanged. A completed delete is not undone if the create
//! that follows it fails.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::branding::Branding;
use crate::client::MetadataClient;
use crate::credentials::{generate_key, generate_secret, OsRandom, RandomSource};
use crate::envelope::{create_connected_app_body, delete_metadata_body, list_metadata_body};
use crate::error::{Error, Result};
use crate::types::{ConnectedApp, ConnectedAppOptions, CONNECTED_APP_TYPE, DEFAULT_API_VERSION};
use crate::xml_helpers::extract_node_values;

const LIST_METADATA: &str = "listMetadata";
const DELETE_METADATA: &str = "deleteMetadata";
const CREATE_METADATA: &str = "createMetadata";

/// Progress of one Connected App setup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    Idle,
    Listing,
    Deleting,
    Creating,
    Done,
    Failed,
}

impl SetupState {
    /// No further transition is possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, SetupState::Done | SetupState::Failed)
    }

    /// Whether `next` may follow this state.
    pub fn can_transition_to(self, next: SetupState) -> bool {
        use SetupState::*;
        match (self, next) {
            (Idle, Listing)
            | (Listing, Deleting)
            | (Listing, Creating)
            | (Deleting, Creating)
            | (Creating, Done) => true,
            (from, Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for SetupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupState::Idle => write!(f, "Idle"),
            SetupState::Listing => write!(f, "Listing"),
            SetupState::Deleting => write!(f, "Deleting"),
            SetupState::Creating => write!(f, "Creating"),
            SetupState::Done => write!(f, "Done"),
            SetupState::Failed => write!(f, "Failed"),
        }
    }
}

/// State of a single `create_connected_app` call.
#[derive(Debug)]
struct SetupRun {
    state: SetupState,
}

impl SetupRun {
    fn new() -> Self {
        Self {
            state: SetupState::Idle,
        }
    }

    fn advance(&mut self, next: SetupState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "Connected App setup transition");
        self.state = next;
    }

    fn fail(&mut self, err: &Error) {
        warn!(state = %self.state, error = %err, "Connected App setup failed");
        self.state = SetupState::Failed;
    }
}

/// Creates, deletes and looks up the branded Connected App.
#[derive(Clone)]
pub struct ConnectedAppManager {
    client: MetadataClient,
    branding: Branding,
    api_version: String,
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for ConnectedAppManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectedAppManager")
            .field("client", &self.client)
            .field("branding", &self.branding)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl ConnectedAppManager {
    /// Manage the default-branded app through `client`.
    pub fn new(client: MetadataClient) -> Self {
        Self::with_branding(client, Branding::default())
    }

    /// Manage the app described by `branding`. The client's `CallOptions`
    /// identifier is taken from the branding.
    pub fn with_branding(client: MetadataClient, branding: Branding) -> Self {
        Self {
            client: client.with_client_id(branding.client_id.clone()),
            branding,
            api_version: DEFAULT_API_VERSION.to_string(),
            random: Arc::new(OsRandom),
        }
    }

    /// Set the API version used by `listMetadata`.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the random source used for generated credentials.
    pub fn with_random_source(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Arc::new(random);
        self
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    pub fn client(&self) -> &MetadataClient {
        &self.client
    }

    /// Create the Connected App, replacing an existing one of the same name.
    ///
    /// Credentials not given in `options` are generated. Returns the
    /// credentials that were sent.
    #[instrument(skip(self, options), fields(app = %self.branding.app_name))]
    pub async fn create_connected_app(&self, options: ConnectedAppOptions) -> Result<ConnectedApp> {
        let mut run = SetupRun::new();

        match self.run_create(&mut run, &options).await {
            Ok(app) => {
                run.advance(SetupState::Done);
                info!("Connected App created");
                Ok(app)
            }
            Err(err) => {
                run.fail(&err);
                Err(err)
            }
        }
    }

    async fn run_create(&self, run: &mut SetupRun, options: &ConnectedAppOptions) -> Result<ConnectedApp> {
        let consumer_key = match options.consumer_key() {
            Some(key) => key.to_string(),
            None => generate_key(self.random.as_ref())?,
        };
        let consumer_secret = match options.consumer_secret() {
            Some(secret) => secret.to_string(),
            None => generate_secret(self.random.as_ref())?,
        };

        run.advance(SetupState::Listing);
        if self.connected_app_exists().await? {
            run.advance(SetupState::Deleting);
            self.delete_connected_app().await?;
        }

        run.advance(SetupState::Creating);
        let body = create_connected_app_body(&self.branding, &consumer_key, &consumer_secret);
        self.client.invoke(CREATE_METADATA, &body).await?;

        Ok(ConnectedApp {
            consumer_key,
            consumer_secret,
        })
    }

    /// Delete the Connected App. Succeeds whether or not it existed.
    #[instrument(skip(self), fields(app = %self.branding.app_name))]
    pub async fn delete_connected_app(&self) -> Result<()> {
        let body = delete_metadata_body(CONNECTED_APP_TYPE, &[&self.branding.app_name]);
        self.client.invoke(DELETE_METADATA, &body).await?;
        info!("Connected App deleted");
        Ok(())
    }

    /// Whether the org has a Connected App with the configured name.
    #[instrument(skip(self), fields(app = %self.branding.app_name))]
    pub async fn connected_app_exists(&self) -> Result<bool> {
        let names = self.list_connected_apps().await?;
        let exists = names.iter().any(|name| name == &self.branding.app_name);
        debug!(apps = names.len(), exists, "Listed Connected Apps");
        Ok(exists)
    }

    /// Full names of all Connected Apps in the org.
    ///
    /// A listing that is not well-formed XML names no apps.
    pub async fn list_connected_apps(&self) -> Result<Vec<String>> {
        let body = list_metadata_body(CONNECTED_APP_TYPE, &self.api_version);
        let response = self.client.invoke(LIST_METADATA, &body).await?;

        match extract_node_values(&response, "fullName") {
            Ok(names) => Ok(names.into_iter().map(|name| name.trim().to_string()).collect()),
            Err(e) => {
                warn!(error = %e, "Connected App listing is not well-formed XML");
                Ok(Vec::new())
            }
        }
    }
}
