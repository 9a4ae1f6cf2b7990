use crossterm::style::Stylize;

use crate::partition::Group;
use crate::theme::Theme;

/// Print the group cards with the active palette
pub(crate) fn print_groups(groups: &[Group], theme: Theme) {
    for group in groups {
        println!();
        println!(
            "  {}  {}",
            group.name().with(theme.primary).bold(),
            format!("({})", group.len()).with(theme.secondary)
        );
        println!("  {}", "────────────────────".with(theme.border));
        for student in group.members() {
            println!("    {}", student.name.as_str().with(theme.text));
        }
    }
    println!();
}
