//! Crawler classification.
//!
//! Identifies automated clients from the User-Agent:
//! - Search engine crawlers (Google, Bing, Yahoo, Baidu)
//! - Link preview fetchers (Facebook, Twitter, LinkedIn, Skype, WhatsApp)
//! - Generic bots and caller-configured names (`Others`)
//!
//! Signatures are evaluated top to bottom and the first match wins, so
//! specific tokens must precede catch-all ones.

use super::{DetectionContext, Detector};
use crate::config::{CrawlerOptions, DetectionOptions};
use crate::error::DetectionError;
use crate::text::find_ignore_ascii_case;
use crate::version::Version;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::{fmt, str::FromStr};
use tracing::trace;

/// Version following a `/`, e.g. `Googlebot/2.1;`.
const SLASH_VERSION: &str = r"^/(\d+\.\d+(?:\.\d+)?)\b";

/// Skype appends its version after a separate `Preview/` token.
const SKYPE_VERSION: &str = r"^\s*Preview/(\d+\.\d+(?:\.\d+)?)\b";

/// Catch-all tokens for crawlers without a dedicated kind.
const GENERIC_TOKENS: &[&str] = &[
    "bot",
    "crawler",
    "spider",
    "slurp",
    "scraper",
    "archiver",
    "lighthouse",
    "yandex",
    "pingdom",
    "facebookcatalog",
];

static DEFAULT_TABLE: LazyLock<SignatureTable> = LazyLock::new(SignatureTable::builtin);

/// Crawler family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CrawlerKind {
    Google,
    Bing,
    Yahoo,
    Baidu,
    Facebook,
    Twitter,
    LinkedIn,
    Skype,
    WhatsApp,
    /// Generic bot or caller-configured name
    Others,
    /// Not a crawler
    #[default]
    Unknown,
}

impl CrawlerKind {
    /// Returns the kind name compared against filter directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlerKind::Google => "Google",
            CrawlerKind::Bing => "Bing",
            CrawlerKind::Yahoo => "Yahoo",
            CrawlerKind::Baidu => "Baidu",
            CrawlerKind::Facebook => "Facebook",
            CrawlerKind::Twitter => "Twitter",
            CrawlerKind::LinkedIn => "LinkedIn",
            CrawlerKind::Skype => "Skype",
            CrawlerKind::WhatsApp => "WhatsApp",
            CrawlerKind::Others => "Others",
            CrawlerKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CrawlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrawlerKind {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(CrawlerKind::Google),
            "bing" => Ok(CrawlerKind::Bing),
            "yahoo" => Ok(CrawlerKind::Yahoo),
            "baidu" => Ok(CrawlerKind::Baidu),
            "facebook" => Ok(CrawlerKind::Facebook),
            "twitter" => Ok(CrawlerKind::Twitter),
            "linkedin" => Ok(CrawlerKind::LinkedIn),
            "skype" => Ok(CrawlerKind::Skype),
            "whatsapp" => Ok(CrawlerKind::WhatsApp),
            "others" => Ok(CrawlerKind::Others),
            "unknown" => Ok(CrawlerKind::Unknown),
            _ => Err(DetectionError::invalid_name("crawler kind", s)),
        }
    }
}

impl Serialize for CrawlerKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CrawlerKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Crawler verdict for a single User-Agent.
///
/// `is_crawler` is false exactly when `kind` is [`CrawlerKind::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    is_crawler: bool,
    kind: CrawlerKind,
    version: Option<Version>,
}

impl ClassificationResult {
    /// The no-match verdict.
    pub const UNKNOWN: ClassificationResult = ClassificationResult {
        is_crawler: false,
        kind: CrawlerKind::Unknown,
        version: None,
    };

    fn matched(kind: CrawlerKind, version: Option<Version>) -> Self {
        if kind == CrawlerKind::Unknown {
            return Self::UNKNOWN;
        }
        Self {
            is_crawler: true,
            kind,
            version,
        }
    }

    pub fn is_crawler(&self) -> bool {
        self.is_crawler
    }

    pub fn kind(&self) -> CrawlerKind {
        self.kind
    }

    /// Version extracted by the matching signature, if any.
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Version with absence collapsed to `0.0`.
    pub fn version_or_zero(&self) -> Version {
        self.version.unwrap_or(Version::ZERO)
    }

    /// Kind name as used by filter directives.
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// How a signature derives its version.
#[derive(Debug, Clone)]
enum VersionRule {
    /// Regex applied to the text after the matched token; group 1 is parsed.
    Pattern(Regex),
    /// The crawler never advertises a number.
    Fixed(Version),
}

/// A single entry of the signature table.
#[derive(Debug, Clone)]
pub struct CrawlerSignature {
    kind: CrawlerKind,
    tokens: Vec<String>,
    version: Option<VersionRule>,
}

impl CrawlerSignature {
    /// Create a signature matching any of `tokens` (case-insensitive).
    pub fn new<I, T>(kind: CrawlerKind, tokens: I) -> Result<Self, DetectionError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        if kind == CrawlerKind::Unknown {
            return Err(DetectionError::invalid_argument(
                "kind",
                "a signature cannot map to Unknown",
            ));
        }
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() || tokens.iter().any(|t| t.trim().is_empty()) {
            return Err(DetectionError::invalid_argument(
                "tokens",
                format!("{kind} signature needs non-blank tokens"),
            ));
        }
        Ok(Self {
            kind,
            tokens,
            version: None,
        })
    }

    /// Extract the version with `pattern`, applied to the text following the
    /// matched token. The first capture group must hold `major.minor[.patch]`.
    pub fn with_version_pattern(mut self, pattern: &str) -> Result<Self, DetectionError> {
        let regex = Regex::new(pattern).map_err(|source| DetectionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        if regex.captures_len() < 2 {
            return Err(DetectionError::MissingCapture(pattern.to_string()));
        }
        self.version = Some(VersionRule::Pattern(regex));
        Ok(self)
    }

    /// Report `version` whenever this signature matches.
    #[must_use]
    pub fn with_fixed_version(mut self, version: Version) -> Self {
        self.version = Some(VersionRule::Fixed(version));
        self
    }

    pub fn kind(&self) -> CrawlerKind {
        self.kind
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the first token present in `ua`.
    fn find(&self, ua: &str) -> Option<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .find(|token| find_ignore_ascii_case(ua, token).is_some())
    }

    fn capture_version(regex: &Regex, rest: &str) -> Option<Version> {
        regex
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Tries the version rule after each occurrence of `token` in turn.
    fn extract_version(&self, ua: &str, token: &str) -> Option<Version> {
        let regex = match self.version.as_ref()? {
            VersionRule::Fixed(version) => return Some(*version),
            VersionRule::Pattern(regex) => regex,
        };

        let mut offset = 0;
        while let Some(start) = ua.get(offset..).and_then(|tail| find_ignore_ascii_case(tail, token)) {
            let end = offset + start + token.len();
            let rest = ua.get(end..).unwrap_or_default();
            if let Some(version) = Self::capture_version(regex, rest) {
                return Some(version);
            }
            offset = end;
        }
        None
    }

    fn classify(&self, ua: &str) -> Option<ClassificationResult> {
        let token = self.find(ua)?;
        Some(ClassificationResult::matched(self.kind, self.extract_version(ua, token)))
    }
}

/// Serializable signature definition, as loaded from a table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDefinition {
    /// Crawler family
    pub kind: CrawlerKind,

    /// Tokens to match (case-insensitive substring)
    pub tokens: Vec<String>,

    /// Regex applied after the matched token; group 1 is the version
    #[serde(default)]
    pub version_pattern: Option<String>,

    /// Version reported on every match
    #[serde(default)]
    pub fixed_version: Option<Version>,
}

/// Ordered crawler signature table.
#[derive(Debug, Clone)]
pub struct SignatureTable {
    signatures: Vec<CrawlerSignature>,
}

impl SignatureTable {
    /// The built-in table.
    pub fn defaults() -> Self {
        DEFAULT_TABLE.clone()
    }

    /// Create an empty table.
    pub fn empty() -> Self {
        Self { signatures: vec![] }
    }

    /// Compile signature definitions, preserving their order.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = SignatureDefinition>,
    ) -> Result<Self, DetectionError> {
        let signatures = definitions
            .into_iter()
            .map(Self::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { signatures })
    }

    /// Load definitions from a JSON file, or YAML when the extension is
    /// `yaml`/`yml`.
    pub fn load(path: &Path) -> Result<Self, DetectionError> {
        let content = std::fs::read_to_string(path).map_err(|source| DetectionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let definitions: Vec<SignatureDefinition> =
            if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
                serde_yaml::from_str(&content)?
            } else {
                serde_json::from_str(&content)?
            };
        Self::from_definitions(definitions)
    }

    fn compile(definition: SignatureDefinition) -> Result<CrawlerSignature, DetectionError> {
        let mut signature = CrawlerSignature::new(definition.kind, definition.tokens)?;
        if let Some(pattern) = definition.version_pattern {
            signature = signature.with_version_pattern(&pattern)?;
        }
        if let Some(version) = definition.fixed_version {
            signature = signature.with_fixed_version(version);
        }
        Ok(signature)
    }

    fn builtin() -> Self {
        let slash = |kind, tokens: &[&str]| {
            CrawlerSignature::new(kind, tokens.iter().copied())
                .and_then(|s| s.with_version_pattern(SLASH_VERSION))
                .expect("valid built-in signature")
        };

        Self {
            signatures: vec![
                slash(
                    CrawlerKind::Google,
                    &[
                        "Googlebot",
                        "Google-InspectionTool",
                        "GoogleOther",
                        "AdsBot-Google",
                        "Mediapartners-Google",
                    ],
                ),
                slash(CrawlerKind::Bing, &["bingbot", "msnbot", "BingPreview"]),
                CrawlerSignature::new(CrawlerKind::Yahoo, ["Yahoo! Slurp"])
                    .expect("valid built-in signature: yahoo")
                    .with_fixed_version(Version::ZERO),
                slash(CrawlerKind::Baidu, &["Baiduspider"]),
                slash(CrawlerKind::Facebook, &["facebookexternalhit", "Facebot"]),
                slash(CrawlerKind::Twitter, &["Twitterbot"]),
                slash(CrawlerKind::LinkedIn, &["LinkedInBot"]),
                CrawlerSignature::new(CrawlerKind::Skype, ["SkypeUriPreview"])
                    .and_then(|s| s.with_version_pattern(SKYPE_VERSION))
                    .expect("valid built-in signature: skype"),
                slash(CrawlerKind::WhatsApp, &["WhatsApp"]),
                CrawlerSignature::new(CrawlerKind::Others, GENERIC_TOKENS.iter().copied())
                    .expect("valid built-in signature: others"),
            ],
        }
    }

    /// Append a signature with the lowest priority.
    pub fn push(&mut self, signature: CrawlerSignature) {
        self.signatures.push(signature);
    }

    /// Builder variant of [`push`](Self::push).
    #[must_use]
    pub fn with_signature(mut self, signature: CrawlerSignature) -> Self {
        self.push(signature);
        self
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Signatures in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &CrawlerSignature> {
        self.signatures.iter()
    }

    fn classify(&self, ua: &str) -> Option<ClassificationResult> {
        self.signatures.iter().find_map(|signature| signature.classify(ua))
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Classify `ua` against the built-in table and the optional extra crawler
/// names in `options.crawler`.
///
/// Only the crawler section of `options` is consulted. Blank extra names are
/// skipped; use [`CrawlerDetector`] to have them rejected up front.
pub fn classify(ua: &str, options: Option<&DetectionOptions>) -> ClassificationResult {
    let others = options
        .map(|o| o.crawler.others.as_slice())
        .unwrap_or_default();
    classify_with(&DEFAULT_TABLE, others.iter().map(String::as_str), ua)
}

fn classify_with<'a>(
    table: &SignatureTable,
    others: impl IntoIterator<Item = &'a str>,
    ua: &str,
) -> ClassificationResult {
    if ua.trim().is_empty() {
        return ClassificationResult::UNKNOWN;
    }

    if let Some(result) = table.classify(ua) {
        trace!(kind = %result.kind, version = ?result.version, "crawler signature matched");
        return result;
    }

    let ua_lower = ua.to_lowercase();
    for name in others {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if ua_lower.contains(&name.to_lowercase()) {
            trace!(name, "configured crawler name matched");
            return ClassificationResult::matched(CrawlerKind::Others, None);
        }
    }

    ClassificationResult::UNKNOWN
}

/// Crawler detector over a signature table and configured extra names.
#[derive(Debug, Clone)]
pub struct CrawlerDetector {
    table: SignatureTable,
    /// Lowercased extra names
    others: Vec<String>,
}

impl CrawlerDetector {
    /// Create a detector with the built-in table.
    pub fn new(options: &CrawlerOptions) -> Result<Self, DetectionError> {
        Self::with_table(SignatureTable::defaults(), options)
    }

    /// Create a detector with a custom table.
    pub fn with_table(table: SignatureTable, options: &CrawlerOptions) -> Result<Self, DetectionError> {
        let mut others = Vec::with_capacity(options.others.len());
        for name in &options.others {
            let name = name.trim();
            if name.is_empty() {
                return Err(DetectionError::invalid_argument(
                    "crawler.others",
                    "crawler names must not be blank",
                ));
            }
            others.push(name.to_lowercase());
        }
        Ok(Self { table, others })
    }

    /// Classify a User-Agent string.
    pub fn classify(&self, ua: &str) -> ClassificationResult {
        classify_with(&self.table, self.others.iter().map(String::as_str), ua)
    }

    pub fn table(&self) -> &SignatureTable {
        &self.table
    }
}

impl Default for CrawlerDetector {
    fn default() -> Self {
        Self {
            table: SignatureTable::defaults(),
            others: vec![],
        }
    }
}

impl Detector for CrawlerDetector {
    type Output = ClassificationResult;

    fn detect(&self, ctx: &DetectionContext) -> ClassificationResult {
        match ctx.user_agent() {
            Some(ua) => self.classify(ua),
            None => ClassificationResult::UNKNOWN,
        }
    }

    fn name(&self) -> &'static str {
        "crawler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_other(name: &str) -> DetectionOptions {
        DetectionOptions {
            crawler: CrawlerOptions::default().with_other(name),
            ..Default::default()
        }
    }

    fn check(ua: &str, kind: CrawlerKind, version: Option<Version>) {
        let result = classify(ua, None);
        assert!(result.is_crawler(), "should be a crawler: {ua}");
        assert_eq!(result.kind(), kind, "kind for: {ua}");
        assert_eq!(result.version(), version, "version for: {ua}");
    }

    #[test]
    fn test_known_crawlers() {
        check(
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
            CrawlerKind::Google,
            Some(Version::new(2, 1)),
        );
        check(
            "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
            CrawlerKind::Bing,
            Some(Version::new(2, 0)),
        );
        check(
            "Mozilla/5.0 (compatible; Baiduspider/2.0; +http://www.baidu.com/search/spider.html)",
            CrawlerKind::Baidu,
            Some(Version::new(2, 0)),
        );
        check(
            "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
            CrawlerKind::Facebook,
            Some(Version::new(1, 1)),
        );
        check("Twitterbot/1.0", CrawlerKind::Twitter, Some(Version::new(1, 0)));
        check(
            "WhatsApp/2.18.61 i",
            CrawlerKind::WhatsApp,
            Some(Version::new(2, 18).with_patch(61)),
        );
        check(
            "Mozilla/5.0 (Windows NT 6.1; WOW64) SkypeUriPreview Preview/0.5",
            CrawlerKind::Skype,
            Some(Version::new(0, 5)),
        );
    }

    #[test]
    fn test_yahoo_reports_zero_version() {
        check(
            "Mozilla/5.0 (compatible; Yahoo! Slurp; http://help.yahoo.com/help/us/ysearch/slurp)",
            CrawlerKind::Yahoo,
            Some(Version::ZERO),
        );
    }

    #[test]
    fn test_specific_token_beats_generic_bot() {
        // Contains "Mozilla", "Jakarta" and "bot"; LinkedIn must win.
        check(
            "LinkedInBot/1.0 (compatible; Mozilla/5.0; Jakarta Commons-HttpClient/3.1 +http://www.linkedin.com)",
            CrawlerKind::LinkedIn,
            Some(Version::new(1, 0)),
        );
    }

    #[test]
    fn test_non_numeric_version_falls_back_to_others() {
        check(
            "Mozilla/5.0 (compatible; SemrushBot/3~bl; +http://www.semrush.com/bot.html)",
            CrawlerKind::Others,
            None,
        );
    }

    #[test]
    fn test_missing_version_digits() {
        check("Googlebot", CrawlerKind::Google, None);
        check("Googlebot/abc", CrawlerKind::Google, None);
        check("Twitterbot/1", CrawlerKind::Twitter, None);
    }

    #[test]
    fn test_version_from_later_token_occurrence() {
        check(
            "Googlebot-Image/1.0 Googlebot/2.1",
            CrawlerKind::Google,
            Some(Version::new(2, 1)),
        );
        check(
            "Googlebot-Video Googlebot-News",
            CrawlerKind::Google,
            None,
        );
    }

    #[test]
    fn test_generic_bot_token_matches_inside_words() {
        check(
            "Mozilla/5.0 (Linux; Android 9; CUBOT X19) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
            CrawlerKind::Others,
            None,
        );
        check("Abbott-Clinic/1.0", CrawlerKind::Others, None);
    }

    #[test]
    fn test_browser_is_not_crawler() {
        for ua in [
            "Mozilla/5.0 (X11; Linux x86_64; rv:10.0) Gecko/20100101 Firefox/10.0",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "",
            "   ",
        ] {
            assert_eq!(classify(ua, None), ClassificationResult::UNKNOWN, "ua: '{ua}'");
        }
    }

    #[test]
    fn test_configured_others() {
        let options = options_with_other("starnic");
        let result = classify("starnic", Some(&options));
        assert!(result.is_crawler());
        assert_eq!(result.kind(), CrawlerKind::Others);
        assert_eq!(result.version(), None);

        let result = classify("Mozilla/5.0 (StarNIC agent)", Some(&options));
        assert_eq!(result.kind(), CrawlerKind::Others);

        assert!(!classify("starnic", None).is_crawler());
    }

    #[test]
    fn test_builtin_signature_beats_configured_name() {
        let options = options_with_other("mozilla");
        let result = classify("Mozilla/5.0 (compatible; Googlebot/2.1)", Some(&options));
        assert_eq!(result.kind(), CrawlerKind::Google);
    }

    #[test]
    fn test_detector_rejects_blank_names() {
        let options = CrawlerOptions::default().with_other("");
        assert!(CrawlerDetector::new(&options).is_err());
    }

    #[test]
    fn test_detector_uses_context() {
        let detector = CrawlerDetector::default();
        let ctx = DetectionContext::from_user_agent("Twitterbot/1.0");
        assert_eq!(detector.detect(&ctx).kind(), CrawlerKind::Twitter);
        assert_eq!(detector.detect(&DetectionContext::new()), ClassificationResult::UNKNOWN);
        assert_eq!(detector.name(), "crawler");
    }

    #[test]
    fn test_custom_table_order() {
        let table = SignatureTable::empty()
            .with_signature(CrawlerSignature::new(CrawlerKind::Others, ["acme"]).unwrap())
            .with_signature(
                CrawlerSignature::new(CrawlerKind::Google, ["acmebot"])
                    .unwrap()
                    .with_version_pattern(SLASH_VERSION)
                    .unwrap(),
            );
        let detector = CrawlerDetector::with_table(table, &CrawlerOptions::default()).unwrap();
        assert_eq!(detector.classify("AcmeBot/1.0").kind(), CrawlerKind::Others);
    }

    #[test]
    fn test_signature_validation() {
        assert!(CrawlerSignature::new(CrawlerKind::Unknown, ["x"]).is_err());
        assert!(CrawlerSignature::new(CrawlerKind::Google, Vec::<String>::new()).is_err());
        assert!(CrawlerSignature::new(CrawlerKind::Google, [" "]).is_err());

        let sig = CrawlerSignature::new(CrawlerKind::Google, ["g"]).unwrap();
        assert!(matches!(
            sig.clone().with_version_pattern("(unclosed"),
            Err(DetectionError::InvalidPattern { .. })
        ));
        assert!(matches!(
            sig.with_version_pattern(r"^/\d+"),
            Err(DetectionError::MissingCapture(_))
        ));
    }

    #[test]
    fn test_definitions_from_json() {
        let json = r#"[
            {"kind": "others", "tokens": ["starnic"], "version_pattern": "^/(\\d+\\.\\d+)"},
            {"kind": "Yahoo", "tokens": ["Slurp"], "fixed_version": "0.0"}
        ]"#;
        let definitions: Vec<SignatureDefinition> = serde_json::from_str(json).unwrap();
        let table = SignatureTable::from_definitions(definitions).unwrap();
        assert_eq!(table.len(), 2);

        let detector = CrawlerDetector::with_table(table, &CrawlerOptions::default()).unwrap();
        let result = detector.classify("Starnic/3.4 (+http://starnic.example)");
        assert_eq!(result.kind(), CrawlerKind::Others);
        assert_eq!(result.version(), Some(Version::new(3, 4)));
        assert_eq!(detector.classify("Slurp").version(), Some(Version::ZERO));
    }

    #[test]
    fn test_kind_names_round_trip() {
        assert_eq!("linkedin".parse::<CrawlerKind>().unwrap(), CrawlerKind::LinkedIn);
        assert_eq!(" WhatsApp ".parse::<CrawlerKind>().unwrap(), CrawlerKind::WhatsApp);
        assert!("altavista".parse::<CrawlerKind>().is_err());
        assert_eq!(CrawlerKind::LinkedIn.to_string(), "LinkedIn");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let detector = CrawlerDetector::new(&CrawlerOptions::default().with_other("starnic")).unwrap();
        for ua in ["Twitterbot/1.0", "starnic", "Mozilla/5.0"] {
            assert_eq!(detector.classify(ua), detector.classify(ua));
        }
    }
}
