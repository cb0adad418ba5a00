use crate::constants::{AUTHORITY_URL, FALLBACK_PATH, GRAPH_URL};
use crate::filter::FilterState;
use crate::source::GraphSettings;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
/// Render the learning-resource gallery from a SharePoint list
pub struct Args {
    /// Output directory
    #[arg(default_value = ".")]
    #[arg(long)]
    pub output_dir: String,

    /// Static JSON catalog used when the list service fails (path or URL)
    #[arg(default_value = FALLBACK_PATH)]
    #[arg(long)]
    pub fallback: String,

    /// Skip the list service, read the fallback catalog only
    #[arg(long)]
    pub offline: bool,

    /// Azure AD tenant
    #[arg(long, env = "TENANT_ID")]
    pub tenant_id: Option<String>,

    /// App registration client id
    #[arg(long, env = "CLIENT_ID")]
    pub client_id: Option<String>,

    /// App registration client secret
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// SharePoint site id
    #[arg(long, env = "SITE_ID")]
    pub site_id: Option<String>,

    /// SharePoint list id holding the catalog
    #[arg(long, env = "LIST_ID")]
    pub list_id: Option<String>,

    /// Pre-issued Graph bearer token, replaces the client secret flow
    #[arg(long, env = "GRAPH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Graph API base URL
    #[arg(default_value = GRAPH_URL)]
    #[arg(long, env = "GRAPH_URL")]
    pub graph_url: String,

    /// Identity platform base URL
    #[arg(default_value = AUTHORITY_URL)]
    #[arg(long, env = "AUTHORITY_URL")]
    pub authority_url: String,

    /// Only show subjects with a topic containing this text
    #[arg(default_value = "")]
    #[arg(long)]
    pub search: String,

    /// Only VR platforms
    #[arg(long)]
    pub vr: bool,

    /// Free resources
    #[arg(long)]
    pub free: bool,

    /// Paid resources
    #[arg(long)]
    pub paid: bool,

    /// Dutch resources
    #[arg(long)]
    pub nl: bool,

    /// English resources
    #[arg(long)]
    pub eng: bool,

    /// Render with the popup of this subject open
    #[arg(long)]
    pub open: Option<String>,

    /// Custom page layout
    #[arg(long)]
    pub template: Option<String>,

    /// Write CSV
    #[arg(short('c'), long("csv"))]
    pub csv: bool,

    /// Print the lists of the SharePoint site and exit
    #[arg(long)]
    pub list_lists: bool,
}

impl Args {
    pub fn filter(&self) -> FilterState {
        FilterState {
            query: self.search.clone(),
            vr_only: self.vr,
            free_only: self.free,
            paid_only: self.paid,
            dutch_only: self.nl,
            english_only: self.eng,
        }
    }

    pub fn graph_settings(&self) -> GraphSettings {
        GraphSettings {
            graph_url: self.graph_url.clone(),
            authority_url: self.authority_url.clone(),
            site_id: self.site_id.clone(),
            list_id: self.list_id.clone(),
            tenant_id: self.tenant_id.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            access_token: self.access_token.clone(),
        }
    }
}
