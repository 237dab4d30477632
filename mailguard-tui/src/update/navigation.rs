//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::App;

use super::open_page;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                open_page(app, id.page());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Command, NavItemId, Page};
    use crate::update::tests::admin_app;
    use mailguard_core::services::View;

    #[test]
    fn confirm_opens_highlighted_view() {
        let mut app = admin_app();
        app.navigation.select_first();
        app.navigation.select_next();
        assert_eq!(app.navigation.current_id(), Some(NavItemId::BlacklistedDomains));

        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Dashboard(View::BlacklistedDomains));
        assert!(matches!(app.take_commands().as_slice(), [Command::Fetch { .. }]));
    }

    #[test]
    fn validator_needs_no_session() {
        let mut app = crate::model::App::new(5);
        app.take_commands();
        app.navigation.select_last();

        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Validator);
        assert!(app.take_commands().is_empty());
    }
}
