//! Byte decoding, base64, digests and password hashing.

use crate::config::DEFAULT_ENCODING_LIST;
use crate::error::StrError;
use crate::str::Str;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::sync::Arc;

fn is_utf8_label(label: &str) -> bool {
    label.eq_ignore_ascii_case("utf-8") || label.eq_ignore_ascii_case("utf8")
}

fn is_ascii_label(label: &str) -> bool {
    label.eq_ignore_ascii_case("ascii") || label.eq_ignore_ascii_case("us-ascii")
}

/// Whether `bytes` decode cleanly as `label`. Unknown labels never match.
pub(crate) fn decodes_as(bytes: &[u8], label: &str) -> bool {
    if is_ascii_label(label) {
        return bytes.is_ascii();
    }
    if is_utf8_label(label) {
        return std::str::from_utf8(bytes).is_ok();
    }
    match encoding_rs::Encoding::for_label(label.as_bytes()) {
        Some(encoding) => encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .is_some(),
        None => false,
    }
}

fn hex<D: Digest>(input: &str) -> String
where
    sha2::digest::Output<D>: std::fmt::LowerHex,
{
    let hash = D::digest(input.as_bytes());
    format!("{hash:x}")
}

impl Str {
    /// Build from raw bytes. Without `from_encoding` the bytes must already
    /// be UTF-8; otherwise they are decoded from that encoding.
    pub fn from_bytes(bytes: &[u8], from_encoding: Option<&str>) -> Result<Str, StrError> {
        let text = match from_encoding {
            Some(label) => Self::convert(bytes, label)?,
            None => std::str::from_utf8(bytes)
                .map_err(|_| StrError::utf8())?
                .to_string(),
        };
        Ok(Str::new(text))
    }

    /// Same as `from_bytes`, attaching `config` to the result.
    pub fn from_bytes_with(
        bytes: &[u8],
        from_encoding: Option<&str>,
        config: Arc<crate::config::StrConfig>,
    ) -> Result<Str, StrError> {
        let mut str = Self::from_bytes(bytes, from_encoding)?;
        str.set_config(config);
        Ok(str)
    }

    /// Decode `bytes` from `encoding` into UTF-8 text. Byte sequences that
    /// are malformed in that encoding are an error.
    pub fn convert(bytes: &[u8], encoding: &str) -> Result<String, StrError> {
        let invalid = || StrError::Encoding {
            encoding: encoding.to_string(),
        };
        if is_ascii_label(encoding) || is_utf8_label(encoding) {
            return match std::str::from_utf8(bytes) {
                Ok(text) if text.is_ascii() || is_utf8_label(encoding) => Ok(text.to_string()),
                _ => Err(invalid()),
            };
        }
        let codec = encoding_rs::Encoding::for_label(encoding.as_bytes())
            .ok_or_else(|| StrError::UnknownEncoding(encoding.to_string()))?;
        let text = codec
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(invalid)?;
        tracing::debug!(
            from = codec.name(),
            bytes = bytes.len(),
            "converted text to utf-8"
        );
        Ok(text.into_owned())
    }

    /// First of ASCII, UTF-8, GB2312, GBK that decodes `bytes` cleanly.
    /// Use `StrConfig::detect_encoding` for a custom candidate list.
    pub fn detect_encoding(bytes: &[u8]) -> Option<&'static str> {
        let found = DEFAULT_ENCODING_LIST
            .into_iter()
            .find(|label| decodes_as(bytes, label));
        tracing::trace!(?found, bytes = bytes.len(), "detected encoding");
        found
    }

    pub fn to_base64(&self) -> Str {
        self.derive(STANDARD.encode(self.str.as_bytes()))
    }

    /// Decode base64 content; the decoded bytes must be UTF-8.
    pub fn from_base64(&self) -> Result<Str, StrError> {
        let bytes = STANDARD.decode(self.str.trim())?;
        let text = String::from_utf8(bytes).map_err(|_| StrError::utf8())?;
        Ok(self.derive(text))
    }

    /// Lower-case hex MD5 digest of the UTF-8 bytes.
    pub fn to_md5(&self) -> String {
        hex::<Md5>(&self.str)
    }

    /// The 16-byte MD5 digest.
    pub fn to_md5_raw(&self) -> Vec<u8> {
        Md5::digest(self.str.as_bytes()).to_vec()
    }

    /// MD5 as bytes: the raw digest when `raw_output` (or the configured
    /// `md5_raw_output`) is set, the hex text otherwise.
    pub fn md5_digest(&self, raw_output: Option<bool>) -> Vec<u8> {
        if raw_output.unwrap_or(self.config.md5_raw_output) {
            self.to_md5_raw()
        } else {
            self.to_md5().into_bytes()
        }
    }

    pub fn to_sha1(&self) -> String {
        hex::<Sha1>(&self.str)
    }

    /// The 20-byte SHA-1 digest.
    pub fn to_sha1_raw(&self) -> Vec<u8> {
        Sha1::digest(self.str.as_bytes()).to_vec()
    }

    /// SHA-1 as bytes, raw or hex per `raw_output` (or `sha1_raw_output`).
    pub fn sha1_digest(&self, raw_output: Option<bool>) -> Vec<u8> {
        if raw_output.unwrap_or(self.config.sha1_raw_output) {
            self.to_sha1_raw()
        } else {
            self.to_sha1().into_bytes()
        }
    }

    pub fn to_sha256(&self) -> String {
        hex::<Sha256>(&self.str)
    }

    /// bcrypt hash of the content, at `cost` or the configured cost.
    pub fn password_hash(&self, cost: Option<u32>) -> Result<String, StrError> {
        let cost = cost.unwrap_or(self.config.password_cost);
        Ok(bcrypt::hash(self.str.as_bytes(), cost)?)
    }

    /// Whether the content matches a bcrypt `hash`. Malformed hashes do not
    /// match.
    pub fn password_verify(&self, hash: &str) -> bool {
        match bcrypt::verify(self.str.as_bytes(), hash) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::debug!(error = %err, "password hash could not be checked");
                false
            }
        }
    }
}
