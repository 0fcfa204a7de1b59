use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

struct AppMetadata {
    file: File,
}

impl AppMetadata {
    fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
        let file = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;
        Ok(Self { file })
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};\n",
            key.to_uppercase(),
            value
        )
    }

    fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let bytes = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
            key.to_uppercase(),
            value.len(),
            bytes
        )
    }
}

/// Pads or truncates a seed string to an exact byte length.
fn fit(mut seed: String, len: usize) -> Vec<u8> {
    seed.truncate(len);
    while seed.len() < len {
        seed.push('!');
    }
    seed.into_bytes()
}

fn main() -> io::Result<()> {
    #[cfg(windows)]
    {
        if Path::new("icon.ico").exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("icon.ico");
            res.compile()?;
        }
    }

    let _ = dotenv();
    println!("cargo:rerun-if-env-changed=CATFEED_ENCRYPTION_KEY");
    println!("cargo:rerun-if-env-changed=CATFEED_ENCRYPTION_IV");

    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "catfeed".to_string());
    let cargo_toml: Value = toml::from_str(&fs::read_to_string("Cargo.toml")?).map_err(io::Error::other)?;

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &package_name)?;
    app_metadata.write("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                app_metadata.write(key, value)?;
            }
        }
    }

    // Session tokens are encrypted with these; real deployments supply them via .env
    let (key, iv) = match (env::var("CATFEED_ENCRYPTION_KEY"), env::var("CATFEED_ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != KEY_LEN {
                panic!("CATFEED_ENCRYPTION_KEY must be exactly {} bytes long, got {}", KEY_LEN, key.len());
            }
            if iv.len() != IV_LEN {
                panic!("CATFEED_ENCRYPTION_IV must be exactly {} bytes long, got {}", IV_LEN, iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning=CATFEED_ENCRYPTION_KEY or CATFEED_ENCRYPTION_IV not set, using package defaults.");
            (
                fit(format!("{}_session_encryption_key", package_name), KEY_LEN),
                fit(format!("{}_session_iv", package_name), IV_LEN),
            )
        }
    };

    app_metadata.write_bytes("ENCRYPTION_KEY", &key)?;
    app_metadata.write_bytes("ENCRYPTION_IV", &iv)?;

    Ok(())
}
