use serde::{Deserialize, Serialize};

/// The three calls the client knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListRecords,
    AddTxt,
    RemoveTxt,
}

/// Where the credentials travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// `Authorization: Basic base64(username:password)`
    Header,
    /// `username` / `password` fields in the JSON body
    Body,
}

/// Selects an [`EndpointProfile`] from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    #[default]
    Header,
    Body,
}

impl ProfileKind {
    pub fn profile(self) -> EndpointProfile {
        match self {
            ProfileKind::Header => EndpointProfile::header_auth(),
            ProfileKind::Body => EndpointProfile::body_auth(),
        }
    }
}

/// Command paths, field names and auth mechanism for one flavour of the
/// zone API. Both flavours share the same command set; they differ in how
/// fields are spelled and where the credentials go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointProfile {
    pub auth: AuthStyle,
    pub list_command: &'static str,
    pub add_command: &'static str,
    pub remove_command: &'static str,
    pub zone_field: &'static str,
    pub name_field: &'static str,
    pub add_value_field: &'static str,
    pub remove_value_field: &'static str,
    /// Sent as `TXT` on removal when set.
    pub remove_type_field: Option<&'static str>,
}

impl EndpointProfile {
    pub fn header_auth() -> Self {
        Self {
            auth: AuthStyle::Header,
            list_command: "zone/get_resource_records",
            add_command: "zone/add_txt",
            remove_command: "zone/remove_record",
            zone_field: "domain",
            name_field: "subdomain",
            add_value_field: "txt",
            remove_value_field: "txt",
            remove_type_field: None,
        }
    }

    pub fn body_auth() -> Self {
        Self {
            auth: AuthStyle::Body,
            list_command: "zone/get_resource_records",
            add_command: "zone/add_txt",
            remove_command: "zone/remove_record",
            zone_field: "dname",
            name_field: "subdomain",
            add_value_field: "text",
            remove_value_field: "content",
            remove_type_field: Some("record_type"),
        }
    }

    pub fn command(&self, operation: Operation) -> &'static str {
        match operation {
            Operation::ListRecords => self.list_command,
            Operation::AddTxt => self.add_command,
            Operation::RemoveTxt => self.remove_command,
        }
    }

    pub fn value_field(&self, operation: Operation) -> &'static str {
        match operation {
            Operation::RemoveTxt => self.remove_value_field,
            _ => self.add_value_field,
        }
    }
}

impl Default for EndpointProfile {
    fn default() -> Self {
        Self::header_auth()
    }
}
