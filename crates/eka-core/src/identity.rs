//! Compact identity string codec.
//!
//! Format: `decentraland:<primaryAddress>/temp/<ephemeralPublicKeyHex>`.

pub const IDENTITY_NAMESPACE: &str = "decentraland";

/// Error type for identity decoding.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("identity string is malformed")]
    Malformed,
}

/// The two fields carried by an identity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub address: String,
    pub ephemeral_public_key: String,
}

pub fn format_identity(address: &str, ephemeral_public_key_hex: &str) -> String {
    format!("{IDENTITY_NAMESPACE}:{address}/temp/{ephemeral_public_key_hex}")
}

/// Split on `:`, then `/`: field 0 is the primary address, field 2 the
/// ephemeral public key.
pub fn parse_identity(identity: &str) -> Result<Identity, IdentityError> {
    let (_namespace, rest) = identity.split_once(':').ok_or(IdentityError::Malformed)?;
    let fields: Vec<&str> = rest.split('/').collect();
    if fields.len() != 3 || fields[0].is_empty() || fields[2].is_empty() {
        return Err(IdentityError::Malformed);
    }
    Ok(Identity {
        address: fields[0].to_string(),
        ephemeral_public_key: fields[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_identity() {
        assert_eq!(
            format_identity("0xabc", "02ff"),
            "decentraland:0xabc/temp/02ff"
        );
    }

    #[test]
    fn test_parse_identity() {
        let identity = parse_identity("decentraland:0xabc/temp/02ff").unwrap();
        assert_eq!(identity.address, "0xabc");
        assert_eq!(identity.ephemeral_public_key, "02ff");
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        assert_eq!(
            parse_identity("decentraland-0xabc/temp/02ff"),
            Err(IdentityError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(parse_identity("ns:0xabc/temp"), Err(IdentityError::Malformed));
        assert_eq!(
            parse_identity("ns:0xabc/temp/02ff/extra"),
            Err(IdentityError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        assert_eq!(parse_identity("ns:/temp/02ff"), Err(IdentityError::Malformed));
        assert_eq!(parse_identity("ns:0xabc/temp/"), Err(IdentityError::Malformed));
    }

    proptest! {
        #[test]
        fn test_identity_round_trip(
            address in "0x[0-9a-f]{40}",
            public_key in "[0-9a-f]{66}",
        ) {
            let encoded = format_identity(&address, &public_key);
            let decoded = parse_identity(&encoded).unwrap();
            prop_assert_eq!(decoded.address, address);
            prop_assert_eq!(decoded.ephemeral_public_key, public_key);
        }
    }
}
