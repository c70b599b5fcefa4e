/// Headers attached to every response, preflight included.
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization, X-Request-Id"),
    ("Access-Control-Max-Age", "86400"),
];

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
