use clap::Parser;
use wasm_bindgen::prelude::*;

mod form;
mod net;
mod scratch;
mod settings;
mod surface;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    campaign: settings::CampaignSettings,
}

impl Args {
    /// Reads arguments from a location hash such as `#-vv&--threshold=0.6`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    /// Like [`Args::from_hash`], but falls back to defaults and hands back the rejection.
    fn resolve(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::from_hash(hash) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
    }

    /// Level for the console logger; a rejected hash always gets its warning through.
    fn log_level(&self, hash_rejected: bool) -> Option<log::Level> {
        let level = self.verbose.log_level();
        if hash_rejected {
            level.max(Some(log::Level::Warn))
        } else {
            level
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, hash_error) = Args::resolve(&location_hash);
    if let Some(log_level) = args.log_level(hash_error.is_some()) {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::warn!("ignoring invalid hash arguments: {}", err);
    }
    log::debug!("campaign: {:?}", args.campaign);

    let root = document()
        .get_element_by_id("app")
        .expect("Could not find id=\"app\" element");

    log::debug!("App started");
    yew::Renderer::<form::ScratchWin>::with_root_and_props(root, args.campaign).render();
}
