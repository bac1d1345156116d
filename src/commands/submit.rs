use anyhow::{bail, Result};

use civicwatch::models::{IssueCategory, User};
use civicwatch::store::IssueStore;
use civicwatch::validate::IssueDraft;

pub struct SubmitArgs {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub photo: Option<String>,
    pub voice_memo: Option<String>,
    pub author: Option<String>,
}

pub fn run(store: &mut IssueStore, users: &[User], args: SubmitArgs) -> Result<()> {
    let author = resolve_author(users, args.author.as_deref())?;

    let draft = IssueDraft {
        title: args.title,
        description: args.description,
        category: args.category,
        location_name: args.location,
        lat: args.lat,
        lng: args.lng,
        photo_url: args.photo,
        voice_memo_url: args.voice_memo,
        author,
    };

    let issue = match draft.into_issue() {
        Ok(issue) => issue,
        Err(e) => {
            eprintln!("Invalid submission:");
            for error in &e.errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
            bail!("Issue not submitted");
        }
    };

    let id = issue.id.clone();
    store.add_issue(issue);
    println!("Submitted issue {}", id);
    println!("Thanks for helping improve your community.");
    Ok(())
}

/// Resolves `--author` against the user roster by id or name, defaulting
/// to the first seed user when omitted.
fn resolve_author(users: &[User], author: Option<&str>) -> Result<User> {
    let Some(wanted) = author else {
        return match users.first() {
            Some(user) => Ok(user.clone()),
            None => bail!("No users available to attribute the report to"),
        };
    };

    match users
        .iter()
        .find(|u| u.id == wanted || u.name.eq_ignore_ascii_case(wanted))
    {
        Some(user) => Ok(user.clone()),
        None => {
            let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
            bail!("Unknown author '{}'. Known users: {}", wanted, names.join(", "));
        }
    }
}
