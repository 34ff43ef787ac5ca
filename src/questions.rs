//! Contact block closing the README.

use std::fmt::Write;

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[must_use]
/// Renders the questions section from a GitHub username and a contact email.
///
/// Blank values count as absent. With neither present nothing is rendered; otherwise only the
/// lines for the supplied values appear under the heading.
pub fn render_questions_section(username: Option<&str>, email: Option<&str>) -> String {
    let username = present(username);
    let email = present(email);

    if username.is_none() && email.is_none() {
        return String::new();
    }

    let mut out = String::from("## Questions\n");
    if let Some(username) = username {
        let _ = write!(
            out,
            "\nGitHub: [{username}](https://github.com/{username})\n"
        );
    }
    if let Some(email) = email {
        let _ = write!(
            out,
            "\nFor additional questions, contact me at: [{email}](mailto:{email})\n"
        );
    }
    out
}

#[cfg(test)]
#[path = "tests/questions.rs"]
mod tests;
