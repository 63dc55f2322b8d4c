//! Subcommand implementations.
//!
//! Each command writes its result to the given writer so it can be driven from
//! tests; diagnostics go through `tracing`.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use clap::Args;
use dicekeys_api::{
    ApiRequest, CallerContext, RequestConfig, RequestError, WebOrigin, matches_corner_letters_hint,
    seed_for,
};
use dicekeys_core::{DiceKey, FaceRead};

use crate::error::CliError;

/// Arguments of `dicekeys seed`
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Human-readable DiceKey (50 or 75 characters)
    #[arg(conflicts_with = "face_reads", required_unless_present = "face_reads")]
    pub form: Option<String>,

    /// JSON file with one face read per die
    #[arg(long, value_name = "PATH")]
    pub face_reads: Option<PathBuf>,

    /// Leave face orientations out of the seed
    #[arg(long)]
    pub exclude_orientations: bool,
}

/// Arguments of `dicekeys authorize`
#[derive(Args, Debug)]
pub struct AuthorizeArgs {
    /// API request URL
    pub request_url: String,

    /// Origin the response will be sent to (https URL)
    #[arg(long, conflicts_with = "android_package", required_unless_present = "android_package")]
    pub origin: Option<String>,

    /// Signed package name of an Android caller
    #[arg(long, value_name = "NAME")]
    pub android_package: Option<String>,

    /// Caller presented a valid authentication handshake token
    #[arg(long)]
    pub handshake_validated: bool,

    /// Treat malformed derivation options or unsealing instructions as empty
    #[arg(long)]
    pub lenient_json: bool,

    /// Human-readable DiceKey; prints the seed the request would derive from
    #[arg(long, value_name = "FORM")]
    pub dice_key: Option<String>,
}

/// Print the canonical seed of a DiceKey.
pub fn seed(args: &SeedArgs, out: &mut impl Write) -> Result<(), CliError> {
    let dice_key = match (&args.form, &args.face_reads) {
        (Some(form), None) => DiceKey::from_human_readable_form(form)?,
        (None, Some(path)) => dice_key_from_face_reads(path)?,
        _ => return Err(CliError::AmbiguousDiceKeySource),
    };

    tracing::debug!(corner_letters = %dice_key.corner_letters(), "DiceKey read");

    writeln!(out, "{}", dice_key.to_seed(!args.exclude_orientations))?;
    Ok(())
}

/// Decode and authorize an API request for one caller.
///
/// Prints the command and the seed-level options on success, and the seed
/// when a DiceKey is given. Rejections are returned as errors.
pub fn authorize(args: &AuthorizeArgs, out: &mut impl Write) -> Result<(), CliError> {
    let config = if args.lenient_json { RequestConfig::lenient() } else { RequestConfig::default() };

    let caller = match (&args.origin, &args.android_package) {
        (Some(origin), None) => CallerContext::web(WebOrigin::from_url(origin)?),
        (None, Some(package_name)) => CallerContext::android(package_name.as_str()),
        _ => {
            return Err(CliError::Request(RequestError::InvalidOrigin(
                "pass exactly one of --origin or --android-package".to_string(),
            )));
        },
    }
    .with_handshake_validated(args.handshake_validated);

    let request = ApiRequest::from_url(&args.request_url, &config)?;
    tracing::info!(command = %request.command(), caller = ?caller.identity(), "authorizing");

    request.authorize(&caller)?;

    writeln!(out, "authorized: {}", request.command())?;
    if let Some(json) = request.derivation_options_json().filter(|json| !json.is_empty()) {
        writeln!(out, "derivationOptionsJson: {json}")?;
    }

    if let Some(form) = &args.dice_key {
        let dice_key = DiceKey::from_human_readable_form(form)?;
        let options = request.derivation_options();

        if matches_corner_letters_hint(&dice_key, options) == Some(false) {
            tracing::warn!("DiceKey does not match the cornerLetters hint");
        }
        writeln!(out, "seed: {}", seed_for(&dice_key, options))?;
    }
    Ok(())
}

fn dice_key_from_face_reads(path: &Path) -> Result<DiceKey, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })?;
    let reads: Vec<FaceRead> = serde_json::from_str(&text)
        .map_err(|source| CliError::FaceReads { path: path.to_path_buf(), source })?;
    Ok(DiceKey::from_face_reads(&reads)?)
}
