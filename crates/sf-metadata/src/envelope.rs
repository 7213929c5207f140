//! SOAP envelope and Metadata API payload construction.

use fuse_sf_client::security::xml;

use crate::branding::Branding;
use crate::types::{CONNECTED_APP_TYPE, METADATA_NS, OAUTH_SCOPES, SOAP_ENVELOPE_NS, XSI_NS};

/// Wrap an operation payload in a session-authenticated SOAP envelope.
///
/// `body_xml` is inserted verbatim; `session_id` and `client_id` are escaped.
pub fn build_envelope(session_id: &str, client_id: &str, body_xml: &str) -> String {
    format!(
        r#"<Envelope xmlns="{soap_ns}">
  <Header>
    <SessionHeader xmlns="{metadata_ns}">
      <sessionId>{session_id}</sessionId>
    </SessionHeader>
    <CallOptions xmlns="{metadata_ns}">
      <client>{client_id}</client>
    </CallOptions>
  </Header>
  <Body>{body_xml}</Body>
</Envelope>"#,
        soap_ns = SOAP_ENVELOPE_NS,
        metadata_ns = METADATA_NS,
        session_id = xml::escape(session_id),
        client_id = xml::escape(client_id),
    )
}

/// `listMetadata` payload for one metadata type.
pub fn list_metadata_body(metadata_type: &str, api_version: &str) -> String {
    format!(
        r#"<listMetadata xmlns="{metadata_ns}">
      <queries>
        <type>{metadata_type}</type>
      </queries>
      <asOfVersion>{api_version}</asOfVersion>
    </listMetadata>"#,
        metadata_ns = METADATA_NS,
        metadata_type = xml::escape(metadata_type),
        api_version = xml::escape(api_version),
    )
}

/// `deleteMetadata` payload for components of one type.
pub fn delete_metadata_body(metadata_type: &str, full_names: &[&str]) -> String {
    let full_names: String = full_names
        .iter()
        .map(|name| format!("\n      <fullNames>{}</fullNames>", xml::escape(name)))
        .collect();

    format!(
        r#"<deleteMetadata xmlns="{metadata_ns}">
      <type>{metadata_type}</type>{full_names}
    </deleteMetadata>"#,
        metadata_ns = METADATA_NS,
        metadata_type = xml::escape(metadata_type),
    )
}

/// `createMetadata` payload describing the branded Connected App.
pub fn create_connected_app_body(
    branding: &Branding,
    consumer_key: &str,
    consumer_secret: &str,
) -> String {
    let scopes: String = OAUTH_SCOPES
        .iter()
        .map(|scope| format!("\n            <scopes>{scope}</scopes>"))
        .collect();

    format!(
        r#"<createMetadata xmlns="{metadata_ns}">
      <metadata xmlns:xsi="{xsi_ns}" xsi:type="{app_type}">
        <fullName>{app_name}</fullName>
        <contactEmail>{contact_email}</contactEmail>
        <description>{description}</description>
        <infoUrl>{info_url}</infoUrl>
        <label>{app_name}</label>
        <oauthConfig>
            <callbackUrl>{callback_url}</callbackUrl>
            <consumerKey>{consumer_key}</consumerKey>
            <consumerSecret>{consumer_secret}</consumerSecret>{scopes}
        </oauthConfig>
      </metadata>
    </createMetadata>"#,
        metadata_ns = METADATA_NS,
        xsi_ns = XSI_NS,
        app_type = CONNECTED_APP_TYPE,
        app_name = xml::escape(&branding.app_name),
        contact_email = xml::escape(&branding.contact_email),
        description = xml::escape(&branding.description),
        info_url = xml::escape(&branding.info_url),
        callback_url = xml::escape(&branding.callback_url),
        consumer_key = xml::escape(consumer_key),
        consumer_secret = xml::escape(consumer_secret),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml_helpers::extract_node_values;

    /// Collapse inter-tag whitespace so structure can be compared literally.
    fn squash(xml: &str) -> String {
        xml.lines().map(str::trim).collect()
    }

    #[test]
    fn test_build_envelope_structure() {
        let envelope = build_envelope("sessionId", "JBoss Fuse", "_body_");
        assert_eq!(
            squash(&envelope),
            concat!(
                r#"<Envelope xmlns="http://schemas.xmlsoap.org/soap/envelope/">"#,
                "<Header>",
                r#"<SessionHeader xmlns="http://soap.sforce.com/2006/04/metadata">"#,
                "<sessionId>sessionId</sessionId>",
                "</SessionHeader>",
                r#"<CallOptions xmlns="http://soap.sforce.com/2006/04/metadata">"#,
                "<client>JBoss Fuse</client>",
                "</CallOptions>",
                "</Header>",
                "<Body>_body_</Body>",
                "</Envelope>",
            )
        );
    }

    #[test]
    fn test_build_envelope_escapes_session_but_not_body() {
        let envelope = build_envelope("a<b", "c&d", "<ping/>");
        assert!(envelope.contains("<sessionId>a&lt;b</sessionId>"));
        assert!(envelope.contains("<client>c&amp;d</client>"));
        assert!(envelope.contains("<Body><ping/></Body>"));
    }

    #[test]
    fn test_list_metadata_body() {
        let body = list_metadata_body("ConnectedApp", "39.0");
        assert_eq!(
            squash(&body),
            concat!(
                r#"<listMetadata xmlns="http://soap.sforce.com/2006/04/metadata">"#,
                "<queries><type>ConnectedApp</type></queries>",
                "<asOfVersion>39.0</asOfVersion>",
                "</listMetadata>",
            )
        );
    }

    #[test]
    fn test_delete_metadata_body() {
        let body = delete_metadata_body("ConnectedApp", &["FuseApp"]);
        assert_eq!(
            squash(&body),
            concat!(
                r#"<deleteMetadata xmlns="http://soap.sforce.com/2006/04/metadata">"#,
                "<type>ConnectedApp</type>",
                "<fullNames>FuseApp</fullNames>",
                "</deleteMetadata>",
            )
        );
    }

    #[test]
    fn test_create_connected_app_body() {
        let body = create_connected_app_body(&Branding::default(), "_consumerKey_", "_consumerSecret_");
        assert_eq!(
            squash(&body),
            concat!(
                r#"<createMetadata xmlns="http://soap.sforce.com/2006/04/metadata">"#,
                r#"<metadata xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="ConnectedApp">"#,
                "<fullName>FuseApp</fullName>",
                "<contactEmail>support@redhat.com</contactEmail>",
                "<description>Salesforce Connected App used for integration with RedHat Fuse middleware.</description>",
                "<infoUrl>https://www.redhat.com/en/technologies/jboss-middleware/fuse</infoUrl>",
                "<label>FuseApp</label>",
                "<oauthConfig>",
                "<callbackUrl>https://login.salesforce.com/services/oauth2/success</callbackUrl>",
                "<consumerKey>_consumerKey_</consumerKey>",
                "<consumerSecret>_consumerSecret_</consumerSecret>",
                "<scopes>Api</scopes>",
                "<scopes>RefreshToken</scopes>",
                "<scopes>OfflineAccess</scopes>",
                "</oauthConfig>",
                "</metadata>",
                "</createMetadata>",
            )
        );
    }

    #[test]
    fn test_full_request_is_well_formed() {
        let body = create_connected_app_body(&Branding::default(), "k+/=", "12345678901234567890");
        let envelope = build_envelope("00D!AQ", "JBoss Fuse", &body);

        assert_eq!(extract_node_values(&envelope, "sessionId").unwrap(), vec!["00D!AQ"]);
        assert_eq!(extract_node_values(&envelope, "consumerKey").unwrap(), vec!["k+/="]);
        assert_eq!(
            extract_node_values(&envelope, "scopes").unwrap(),
            vec!["Api", "RefreshToken", "OfflineAccess"]
        );
    }
}
