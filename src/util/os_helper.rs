/// Real name of the OS user, falling back to the login name.
pub fn user_display_name() -> String {
    let name = whoami::realname();
    if !name.is_empty() {
        return name;
    }
    whoami::username()
}
