pub mod export;
pub mod init;
pub mod leaderboard;
pub mod list;
pub mod map;
pub mod sentiment;
pub mod show;
pub mod status;
pub mod submit;
pub mod summarize;
pub mod transcribe;
