use super::{Contact, ContactStore};

/// The one message shown for every recognized input-shape failure.
pub const UNIVERSAL_ERROR_MESSAGE: &str = "Enter the argument for the command";

// The three ways a store command can reject its input. None of them reaches
// the user as-is; `normalize` collapses all of them into one message.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    MissingArgument,
    UnknownContact(String),
    DuplicateContact(String),
}

/// Collapses any handler failure into the universal error message. Success
/// messages pass through untouched.
pub fn normalize(result: Result<String, CommandError>) -> String {
    match result {
        Ok(message) => message,
        Err(_) => UNIVERSAL_ERROR_MESSAGE.to_string(),
    }
}

/// Inserts a new contact. Takes exactly two arguments: name and phone.
pub fn add_contact(args: &[String], contacts: &mut ContactStore) -> Result<String, CommandError> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArgument);
    };

    if contacts.contains(name) {
        return Err(CommandError::DuplicateContact(name.clone()));
    }

    contacts.add_contact(Contact {
        name: name.clone(),
        phone: phone.clone(),
    });

    Ok("Contact added.".to_string())
}

/// Overwrites the phone of an existing contact. Takes exactly two arguments:
/// name and the new phone.
pub fn change_contact(
    args: &[String],
    contacts: &mut ContactStore,
) -> Result<String, CommandError> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArgument);
    };

    if !contacts.set_phone(name, phone.clone()) {
        return Err(CommandError::UnknownContact(name.clone()));
    }

    Ok("Contact updated.".to_string())
}

/// Returns the stored phone for a name. Arguments past the first are ignored.
pub fn show_phone(args: &[String], contacts: &ContactStore) -> Result<String, CommandError> {
    let Some(name) = args.first() else {
        return Err(CommandError::MissingArgument);
    };

    match contacts.phone_of(name) {
        Some(phone) => Ok(phone.to_string()),
        None => Err(CommandError::UnknownContact(name.clone())),
    }
}

/// Lists every contact as `name: phone` lines in insertion order. Never fails.
pub fn show_all(contacts: &ContactStore) -> String {
    if contacts.is_empty() {
        return "No contacts saved.".to_string();
    }

    let lines: Vec<String> = contacts
        .iter()
        .map(|contact| format!("{}: {}", contact.name, contact.phone))
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn adds_and_reads_back_a_contact() -> Result<(), CommandError> {
        let mut store = ContactStore::new();

        let message = add_contact(&args(&["John", "123-456"]), &mut store)?;
        assert_eq!(message, "Contact added.");

        let phone = show_phone(&args(&["John"]), &store)?;
        assert_eq!(phone, "123-456");
        Ok(())
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let mut store = ContactStore::new();

        add_contact(&args(&["John", "123"]), &mut store).unwrap();
        let second = add_contact(&args(&["John", "456"]), &mut store);

        assert_eq!(
            second,
            Err(CommandError::DuplicateContact("John".to_string()))
        );

        // The first phone must survive the rejected insert.
        assert_eq!(store.phone_of("John"), Some("123"));
    }

    #[test]
    fn add_rejects_wrong_arity() {
        let mut store = ContactStore::new();

        assert_eq!(
            add_contact(&args(&[]), &mut store),
            Err(CommandError::MissingArgument)
        );
        assert_eq!(
            add_contact(&args(&["John"]), &mut store),
            Err(CommandError::MissingArgument)
        );
        assert_eq!(
            add_contact(&args(&["John", "123", "extra"]), &mut store),
            Err(CommandError::MissingArgument)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn change_overwrites_existing_contact() -> Result<(), CommandError> {
        let mut store = ContactStore::new();

        add_contact(&args(&["Ann", "999"]), &mut store)?;
        let message = change_contact(&args(&["Ann", "555"]), &mut store)?;

        assert_eq!(message, "Contact updated.");
        assert_eq!(store.phone_of("Ann"), Some("555"));
        Ok(())
    }

    #[test]
    fn change_rejects_unknown_contact() {
        let mut store = ContactStore::new();

        assert_eq!(
            change_contact(&args(&["Ann", "555"]), &mut store),
            Err(CommandError::UnknownContact("Ann".to_string()))
        );
    }

    #[test]
    fn phone_rejects_unknown_contact_and_missing_name() {
        let store = ContactStore::new();

        assert_eq!(
            show_phone(&args(&["Ann"]), &store),
            Err(CommandError::UnknownContact("Ann".to_string()))
        );
        assert_eq!(
            show_phone(&args(&[]), &store),
            Err(CommandError::MissingArgument)
        );
    }

    #[test]
    fn phone_ignores_extra_arguments() -> Result<(), CommandError> {
        let mut store = ContactStore::new();

        add_contact(&args(&["Ann", "999"]), &mut store)?;

        assert_eq!(show_phone(&args(&["Ann", "ignored"]), &store)?, "999");
        Ok(())
    }

    #[test]
    fn all_lists_in_insertion_order() {
        let mut store = ContactStore::new();

        add_contact(&args(&["Ann", "999"]), &mut store).unwrap();
        add_contact(&args(&["Bob", "111"]), &mut store).unwrap();

        assert_eq!(show_all(&store), "Ann: 999\nBob: 111");
    }

    #[test]
    fn all_on_empty_store_has_fixed_message() {
        let store = ContactStore::new();

        assert_eq!(show_all(&store), "No contacts saved.");
    }

    #[test]
    fn normalize_hides_every_failure_kind() {
        assert_eq!(
            normalize(Err(CommandError::MissingArgument)),
            UNIVERSAL_ERROR_MESSAGE
        );
        assert_eq!(
            normalize(Err(CommandError::UnknownContact("Ann".to_string()))),
            UNIVERSAL_ERROR_MESSAGE
        );
        assert_eq!(
            normalize(Err(CommandError::DuplicateContact("Ann".to_string()))),
            UNIVERSAL_ERROR_MESSAGE
        );
    }

    #[test]
    fn normalize_passes_success_through() {
        assert_eq!(normalize(Ok("Contact added.".to_string())), "Contact added.");
    }
}
