use anyhow::Result;

use civicwatch::models::User;

pub fn run(users: &[User]) -> Result<()> {
    if users.is_empty() {
        println!("No users yet.");
        return Ok(());
    }

    let ranked = ranked(users);
    println!("Top Citizens");
    for (index, user) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {} {:<20} {:>6} pts",
            index + 1,
            medal(index),
            user.name,
            user.points
        );
    }

    Ok(())
}

fn ranked(users: &[User]) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked
}

fn medal(index: usize) -> &'static str {
    match index {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "  ",
    }
}
