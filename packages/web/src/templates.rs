use tera::Tera;

/// Compile the page templates. They are embedded in the binary so the
/// server has no runtime directory dependency.
pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("about.html", include_str!("../templates/about.html")),
        ("details.html", include_str!("../templates/details.html")),
        ("signup.html", include_str!("../templates/signup.html")),
        ("login.html", include_str!("../templates/login.html")),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        build().unwrap();
    }
}
