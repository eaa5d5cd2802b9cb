// src/core/selector.rs

use crate::{
    models::{Pack, PackCatalog},
    ui,
};
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("User Interface Error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl SelectorError {
    /// True when the underlying prompt was interrupted (Ctrl+C). The caller
    /// treats this as a clean abort of the whole process, not a failure.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::Dialoguer(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted
        )
    }
}

/// The states of the interactive selection loop.
///
/// There is no terminal state: under normal input the machine only ever
/// leaves through the Start action, which yields the chosen pack name.
/// Interrupting a prompt aborts the whole loop via [`SelectorError`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectorState {
    /// Enumerate all packs and ask for a number.
    ChoosingPack,
    /// Offer Start / Show commands / Cancel for the chosen pack.
    PackMenu(String),
    /// Print the chosen pack's commands, then return to its menu.
    ListingCommands(String),
}

/// What the user picked in the pack menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Start,
    ShowCommands,
    Cancel,
}

impl MenuAction {
    fn from_choice(choice: usize) -> Option<Self> {
        match choice {
            1 => Some(Self::Start),
            2 => Some(Self::ShowCommands),
            3 => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Runs the interactive menu until the user starts a pack, and returns that
/// pack's name (always a valid catalog key).
///
/// Invalid input never terminates the loop: an out-of-range pack number or
/// menu choice re-prompts in place. Cancelling a pack menu goes back to pack
/// selection.
pub fn select_pack(catalog: &PackCatalog) -> Result<String, SelectorError> {
    let mut state = SelectorState::ChoosingPack;
    loop {
        state = match state {
            SelectorState::ChoosingPack => SelectorState::PackMenu(prompt_pack_choice(catalog)?),
            SelectorState::PackMenu(name) => {
                match prompt_menu_action(catalog, &name)? {
                    MenuAction::Start => return Ok(name),
                    MenuAction::ShowCommands => SelectorState::ListingCommands(name),
                    MenuAction::Cancel => SelectorState::ChoosingPack,
                }
            }
            SelectorState::ListingCommands(name) => {
                println!();
                println!("{name} commands: ");
                if let Some(pack) = catalog.get(&name) {
                    for command in &pack.commands {
                        println!("{command}");
                    }
                }
                SelectorState::PackMenu(name)
            }
        };
    }
}

/// Enumerates the catalog and prompts for a 1-based pack number until the
/// input is in range.
fn prompt_pack_choice(catalog: &PackCatalog) -> Result<String, SelectorError> {
    loop {
        ui::separator("Command packages:", '-');
        for line in pack_listing(catalog) {
            println!("{line}");
        }
        ui::rule();

        let num: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the package number and click Enter (ctrl+c to exit)")
            .interact_text()?;

        match pack_by_index(catalog, num) {
            Some(pack) => return Ok(pack.name.clone()),
            None => println!("Input Error!"),
        }
    }
}

/// Shows the three-item pack menu until the user picks a valid action.
fn prompt_menu_action(catalog: &PackCatalog, name: &str) -> Result<MenuAction, SelectorError> {
    let count = catalog.get(name).map_or(0, Pack::count);
    loop {
        ui::rule();
        println!("The selected package {name} | Commands:[{count}]");
        ui::rule();
        println!("1. Start");
        println!("2. Show commands");
        println!("3. Cancel");
        ui::rule();

        let choice: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the desired number and press ENTER")
            .interact_text()?;
        ui::rule();

        match MenuAction::from_choice(choice) {
            Some(action) => return Ok(action),
            None => println!("Input Error!"),
        }
    }
}

/// The enumeration lines shown in the pack-selection state, in catalog
/// order: `N. name | Commands[count]`, N starting at 1.
fn pack_listing(catalog: &PackCatalog) -> Vec<String> {
    catalog
        .iter()
        .enumerate()
        .map(|(i, pack)| format!("{}. {} | Commands[{}]", i + 1, pack.name, pack.count()))
        .collect()
}

/// Looks up a pack by its 1-based menu index.
fn pack_by_index(catalog: &PackCatalog, num: usize) -> Option<&Pack> {
    num.checked_sub(1).and_then(|i| catalog.iter().nth(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PackCatalog {
        [
            Pack::new("default", vec!["echo hello".to_string()]),
            Pack::new("Ubuntu", vec!["apt update".to_string(), "apt upgrade -y".to_string()]),
            Pack::new("empty", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_listing_enumerates_all_packs_in_order() {
        let lines = pack_listing(&catalog());
        assert_eq!(
            lines,
            [
                "1. default | Commands[1]",
                "2. Ubuntu | Commands[2]",
                "3. empty | Commands[0]",
            ]
        );
    }

    #[test]
    fn test_pack_by_index_is_one_based() {
        let catalog = catalog();
        assert_eq!(pack_by_index(&catalog, 1).unwrap().name, "default");
        assert_eq!(pack_by_index(&catalog, 3).unwrap().name, "empty");
        assert!(pack_by_index(&catalog, 0).is_none());
        assert!(pack_by_index(&catalog, 4).is_none());
    }

    #[test]
    fn test_menu_actions_map_one_two_three() {
        assert_eq!(MenuAction::from_choice(1), Some(MenuAction::Start));
        assert_eq!(MenuAction::from_choice(2), Some(MenuAction::ShowCommands));
        assert_eq!(MenuAction::from_choice(3), Some(MenuAction::Cancel));
        assert_eq!(MenuAction::from_choice(0), None);
        assert_eq!(MenuAction::from_choice(4), None);
    }
}
