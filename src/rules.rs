// rules.rs - Builtin detection rule tables
// Purpose: Secret regexes, juicy parameter names and sensitive file extensions

use lazy_static::lazy_static;
use serde::Serialize;

/// Lowest file-type detection level.
pub const SEVERITY_MIN: i32 = 1;
/// Highest file-type detection level.
pub const SEVERITY_MAX: i32 = 7;

/// A named secret-detection rule with its regex pattern and a short
/// proof-of-concept note for triage.
#[derive(Debug, Clone, Serialize)]
pub struct SecretRule {
    pub name: String,
    pub description: String,
    pub pattern: String,
    pub poc: String,
}

impl SecretRule {
    fn new(name: &str, description: &str, pattern: &str, poc: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            pattern: pattern.to_string(),
            poc: poc.to_string(),
        }
    }

    /// Rule wrapper for a caller-supplied raw pattern.
    pub fn custom(pattern: &str) -> Self {
        Self::new("custom", "", pattern, "")
    }
}

/// A sensitive file extension and its severity rank in
/// [SEVERITY_MIN, SEVERITY_MAX]. Higher rank means more sensitive; a rule is
/// active when its severity is within the configured detection level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTypeRule {
    pub extension: &'static str,
    pub severity: i32,
}

const fn ext(extension: &'static str, severity: i32) -> FileTypeRule {
    FileTypeRule { extension, severity }
}

lazy_static! {
    /// Builtin secret rules, tested against every fetched response body.
    pub static ref SECRET_RULES: Vec<SecretRule> = vec![
        SecretRule::new(
            "AWS Access Key",
            "AWS access key ID",
            r"(?:A3T[A-Z0-9]|AKIA|AGPA|AIDA|AROA|AIPA|ANPA|ANVA|ASIA)[A-Z0-9]{16}",
            "aws sts get-caller-identity with the paired secret key",
        ),
        SecretRule::new(
            "AWS Secret Key",
            "AWS secret access key assignment",
            r#"(?i)aws[_\s]*secret[_\s]*(?:access[_\s]*)?key[_\s]*[=:]["']?([A-Za-z0-9/+=]{40})["']?"#,
            "aws sts get-caller-identity with the paired access key ID",
        ),
        SecretRule::new(
            "GitHub Personal Access Token",
            "GitHub classic personal access token",
            r"ghp_[a-zA-Z0-9]{36}",
            "curl -H 'Authorization: Bearer <token>' https://api.github.com/user",
        ),
        SecretRule::new(
            "GitHub Fine-Grained Token",
            "GitHub fine-grained personal access token",
            r"github_pat_[0-9a-zA-Z]{22}_[0-9a-zA-Z]{59}",
            "curl -H 'Authorization: Bearer <token>' https://api.github.com/user",
        ),
        SecretRule::new(
            "GitHub OAuth Token",
            "GitHub OAuth access token",
            r"gho_[a-zA-Z0-9]{36}",
            "curl -H 'Authorization: Bearer <token>' https://api.github.com/user",
        ),
        SecretRule::new(
            "Stripe Live Secret Key",
            "Stripe live-mode secret key",
            r"sk_live_[0-9a-zA-Z]{24,}",
            "curl -u <key>: https://api.stripe.com/v1/balance",
        ),
        SecretRule::new(
            "Stripe Restricted Key",
            "Stripe live-mode restricted key",
            r"rk_live_[0-9a-zA-Z]{24,}",
            "curl -u <key>: https://api.stripe.com/v1/balance",
        ),
        SecretRule::new(
            "Google API Key",
            "Google Cloud / Firebase API key",
            r"AIza[0-9A-Za-z\-_]{35}",
            "check key restrictions in the Cloud console before reporting",
        ),
        SecretRule::new(
            "Slack Token",
            "Slack bot/app/user token",
            r"xox[baprs]-[0-9]{10,13}-[0-9]{10,13}[a-zA-Z0-9-]*",
            "curl -H 'Authorization: Bearer <token>' https://slack.com/api/auth.test",
        ),
        SecretRule::new(
            "Slack Webhook",
            "Slack incoming webhook URL",
            r"https://hooks\.slack\.com/services/T[a-zA-Z0-9_]+/B[a-zA-Z0-9_]+/[a-zA-Z0-9_]+",
            "POST a test payload to the webhook URL",
        ),
        SecretRule::new(
            "Discord Webhook",
            "Discord webhook URL",
            r"https://(?:ptb\.|canary\.)?discord(?:app)?\.com/api/webhooks/[0-9]+/[A-Za-z0-9_-]+",
            "GET on the webhook URL returns channel metadata",
        ),
        SecretRule::new(
            "SendGrid API Key",
            "SendGrid API key",
            r"SG\.[a-zA-Z0-9_-]{22}\.[a-zA-Z0-9_-]{43}",
            "curl -H 'Authorization: Bearer <key>' https://api.sendgrid.com/v3/scopes",
        ),
        SecretRule::new(
            "Twilio API Key",
            "Twilio API key SID",
            r"SK[0-9a-fA-F]{32}",
            "",
        ),
        SecretRule::new(
            "Mailgun API Key",
            "Mailgun private API key",
            r"key-[a-zA-Z0-9]{32}",
            "curl -u api:<key> https://api.mailgun.net/v3/domains",
        ),
        SecretRule::new(
            "NPM Token",
            "npm registry access token",
            r"npm_[A-Za-z0-9]{36}",
            "npm whoami --registry https://registry.npmjs.org --//registry.npmjs.org/:_authToken=<token>",
        ),
        SecretRule::new(
            "PyPI Upload Token",
            "PyPI API token",
            r"pypi-[A-Za-z0-9_-]{50,}",
            "",
        ),
        SecretRule::new(
            "Telegram Bot Token",
            "Telegram bot API token",
            r"[0-9]+:AA[0-9A-Za-z_-]{33}",
            "curl https://api.telegram.org/bot<token>/getMe",
        ),
        SecretRule::new(
            "JSON Web Token",
            "Signed JWT embedded in the response",
            r"eyJ[a-zA-Z0-9_-]+\.eyJ[a-zA-Z0-9_-]+\.[a-zA-Z0-9_-]+",
            "decode the payload and check expiry and claims",
        ),
        SecretRule::new(
            "Private Key Block",
            "PEM private key material",
            r"-----BEGIN (?:RSA |EC |OPENSSH |DSA |PGP )?PRIVATE KEY",
            "",
        ),
        SecretRule::new(
            "Database Connection String",
            "Connection URI with inline credentials",
            r"(?i)(?:postgres|postgresql|mysql|mongodb|redis)(?:\+srv)?://[^:/\s]+:[^@\s]{6,}@[^/\s]+",
            "connect with the client for the scheme and enumerate databases",
        ),
        SecretRule::new(
            "Heroku API Key",
            "Heroku platform API key assignment",
            r#"(?i)heroku[_\s]*(?:api[_\s]*)?key[_\s]*[=:]["']?([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})["']?"#,
            "",
        ),
        SecretRule::new(
            "Generic API Key",
            "Quoted api key assignment",
            r#"(?i)(?:api[_-]?key|apikey|x-api-key)["']?\s*[:=]\s*["'][0-9a-zA-Z_\-]{16,}["']"#,
            "identify the consuming service from surrounding code",
        ),
    ];
}

/// Builtin juicy query-parameter names, matched by substring containment on
/// the whole URL.
pub static JUICY_PARAMETERS: &[&str] = &[
    "redirect",
    "redirect_to",
    "redirect_uri",
    "redirect_url",
    "return",
    "return_to",
    "return_url",
    "returnTo",
    "checkout_url",
    "continue",
    "next",
    "goto",
    "dest",
    "destination",
    "target",
    "url",
    "uri",
    "callback",
    "jsonp",
    "file",
    "filename",
    "folder",
    "document",
    "template",
    "path",
    "page",
    "include",
    "require",
    "load",
    "preview",
    "id",
    "user",
    "username",
    "account",
    "email",
    "token",
    "auth",
    "key",
    "access_token",
    "api_key",
    "password",
    "passwd",
    "debug",
    "cmd",
    "exec",
    "command",
    "query",
    "search",
    "domain",
    "site",
    "validate",
];

/// Builtin file-type table. Extensions are unique keys; matching walks the
/// table in declaration order and the last satisfying entry wins.
pub static FILETYPE_RULES: &[FileTypeRule] = &[
    // 1: routinely exposed, occasionally interesting
    ext("log", 1),
    ext("txt", 1),
    ext("xml", 1),
    ext("csv", 1),
    // 2: configuration surfaces
    ext("json", 2),
    ext("yml", 2),
    ext("yaml", 2),
    ext("conf", 2),
    ext("cfg", 2),
    ext("ini", 2),
    // 3: bundles and archives
    ext("zip", 3),
    ext("tar", 3),
    ext("gz", 3),
    ext("7z", 3),
    ext("rar", 3),
    ext("cache", 3),
    // 4: editor and deployment leftovers
    ext("bak", 4),
    ext("backup", 4),
    ext("old", 4),
    ext("orig", 4),
    ext("swp", 4),
    ext("dist", 4),
    // 5: database material
    ext("sql", 5),
    ext("db", 5),
    ext("sqlite", 5),
    ext("sqlite3", 5),
    ext("dump", 5),
    ext("mdb", 5),
    // 6: credential stores
    ext("passwd", 6),
    ext("htpasswd", 6),
    ext("secret", 6),
    ext("secrets", 6),
    ext("credentials", 6),
    // 7: key material and environment files
    ext("pem", 7),
    ext("key", 7),
    ext("p12", 7),
    ext("pfx", 7),
    ext("ppk", 7),
    ext("env", 7),
];
