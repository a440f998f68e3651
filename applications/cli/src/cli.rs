//! Command definitions and dispatch.

use anyhow::Context;
use clap::{Parser, Subcommand};
use resonate_client::{
    AuthState, ClientConfig, FileSessionBackend, PublishStep, ResonateClient, SessionStore,
    TrackDraft,
};
use resonate_core::{CreateRelease, UserType};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "resonate")]
#[command(version, about = "Client for the Resonate music-release platform", long_about = None)]
struct Cli {
    /// Backend API base URL
    #[arg(long, env = "RESONATE_URL", default_value = "http://localhost:8080/api")]
    server: String,

    /// Session file (defaults to the platform config dir)
    #[arg(long)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account (verification email follows)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Account kind: artist or fan
        #[arg(long, value_parser = parse_user_type)]
        user_type: UserType,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Resend the verification email for a pending account
    ResendVerification {
        #[arg(long)]
        email: String,
    },
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Browse the public release catalog
    Releases {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Show one release with its tracks
    Show { release_id: i64 },
    /// Delete a release you own
    Delete { release_id: i64 },
    /// Publish a release with tracks
    ///
    /// Each TRACK is "Title" for a metadata-only track or
    /// "Title=path/to/audio.flac" to upload audio.
    Publish {
        #[arg(long)]
        title: String,
        /// Release date (ISO 8601); defaults to now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        upc: Option<String>,
        /// Tracks in order
        #[arg(required = true)]
        tracks: Vec<String>,
    },
    /// Fetch a playable URL for a registered audio file
    Stream { audio_file_id: i64 },
}

fn parse_user_type(s: &str) -> Result<UserType, String> {
    match s {
        "artist" => Ok(UserType::Artist),
        "fan" => Ok(UserType::Fan),
        other => Err(format!("unknown user type: {other} (expected artist or fan)")),
    }
}

fn parse_track(spec: &str) -> TrackDraft {
    match spec.split_once('=') {
        Some((title, path)) => TrackDraft::new(title).with_audio_file(path),
        None => TrackDraft::new(spec),
    }
}

fn build_client(args: &Cli) -> anyhow::Result<ResonateClient> {
    let backend = match &args.session_file {
        Some(path) => FileSessionBackend::new(path),
        None => FileSessionBackend::default_path()?,
    };
    let session = SessionStore::open(Box::new(backend))?;
    let client = ResonateClient::new(ClientConfig::new(&args.server), session)?;
    Ok(client)
}

pub async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    let client = build_client(&args)?;

    match args.command {
        Commands::Register {
            email,
            password,
            user_type,
            bio,
        } => {
            client
                .auth()
                .register(&email, &password, user_type, bio.as_deref())
                .await?;
            println!("Account created. Check {email} for the verification link.");
        }
        Commands::ResendVerification { email } => {
            client.auth().resend_verification_email(&email).await?;
            println!("Verification email resent to {email}.");
        }
        Commands::Login { email, password } => {
            let login = client.auth().login(&email, &password).await?;
            println!("Logged in as {}", login.user_id);
        }
        Commands::Logout => {
            client.auth().logout();
            println!("Logged out.");
        }
        Commands::Whoami => match client.session().state() {
            AuthState::Anonymous => println!("Not logged in."),
            AuthState::PendingVerification { email, user_type } => {
                println!("Pending verification: {email} ({user_type})");
            }
            AuthState::Authenticated(session) => {
                let kind = session
                    .user_type
                    .map_or_else(|| "unknown".to_string(), |t| t.to_string());
                println!("{} ({kind})", session.user_id);
            }
        },
        Commands::Releases { page, size } => {
            let releases = client.releases().list_public(page, size).await?;
            println!("{} releases total", releases.total);
            for release in releases.content {
                println!("{:>6}  {}  ({})", release.id, release.title, release.release_date);
            }
        }
        Commands::Show { release_id } => {
            let release = client.releases().get_public(release_id).await?;
            println!("{}  by {}", release.title, release.artist_id);
            for track in release.tracks.unwrap_or_default() {
                let audio = if track.audio_file.is_some() { "audio" } else { "metadata-only" };
                println!("  {:>4}  {}  [{audio}]", track.id, track.title);
            }
        }
        Commands::Delete { release_id } => {
            client.releases().delete(release_id).await?;
            println!("Release {release_id} deleted.");
        }
        Commands::Publish {
            title,
            date,
            upc,
            tracks,
        } => {
            let artist = client
                .session()
                .user_id()
                .context("log in as an artist before publishing")?;

            let date = date.unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
            let mut draft = CreateRelease::new(artist, title, date);
            draft.upc = upc;

            let track_drafts: Vec<TrackDraft> = tracks.iter().map(|s| parse_track(s)).collect();
            info!(tracks = track_drafts.len(), "Publishing release");

            let outcome = client
                .publisher()
                .publish_with_progress(&draft, track_drafts, |p| {
                    if p.step == PublishStep::Created {
                        println!("[{}/{}] {}", p.track_index + 1, p.total_tracks, p.title);
                    }
                })
                .await?;

            println!(
                "Published \"{}\" (release {}) with {} tracks.",
                outcome.release.title,
                outcome.release.id,
                outcome.tracks.len()
            );
        }
        Commands::Stream { audio_file_id } => {
            let url = client.audio_files().streaming_url(audio_file_id).await?;
            println!("{url}");
        }
    }

    Ok(())
}
