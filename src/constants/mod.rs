use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident, $default:expr) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).unwrap_or_else(|_| String::from($default))
        });
    };
}

lazy_env_var!(LOG_LEVEL, "info");
lazy_env_var!(CREDENTIAL_NOTICE_TARGET, "blogflow_models::credentials");

pub const OBJECT_ID_HEX_LEN: usize = 24;
