/// `<name> <version> (<os>; <os version>)`
pub(crate) fn default_user_agent() -> String {
    let info = os_info::get();
    let os_type = info.os_type();
    let os_version = info.version().to_string();
    let app_name = env!("CARGO_PKG_NAME");
    let app_version = env!("CARGO_PKG_VERSION");
    format!("{} {} ({}; {})", app_name, app_version, os_type, os_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_package_name_and_version() {
        let ua = default_user_agent();
        assert!(ua.starts_with(&format!("{} {} (", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))));
        assert!(ua.ends_with(')'));
    }
}
