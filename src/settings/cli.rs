use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Hide or update a user's avatar")]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    /// Hide the avatar container before any update is issued.
    #[arg(long)]
    pub hide: bool,

    /// User to fetch an avatar for. Repeat to issue several updates back to back.
    #[arg(long = "user")]
    pub users: Vec<String>,
}
