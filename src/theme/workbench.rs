use indexmap::IndexMap;

use crate::palette::{Palette, ThemeKind};

/// Editor chrome colors: everything outside the text buffer.
///
/// Alpha-suffixed literals in the dark branches are fixed values, not derived from
/// the palette.
pub(super) fn workbench_colors(p: &Palette) -> IndexMap<String, String> {
    // Text drawn over accent and selection surfaces.
    let strong_fg = by_kind(p.kind, &p.ui_fg, &p.white);
    let inactive_selection = format!("{}83", p.selection_bg);

    let mut colors = IndexMap::new();
    let mut set = |key: &str, value: &str| {
        colors.insert(key.to_string(), value.to_string());
    };
    set("foreground", &p.ui_fg);
    set("focusBorder", &p.focus_border);
    set("selection.background", &p.accent_blue);
    set("scrollbar.shadow", &p.shadow_bg);
    set("activityBar.foreground", strong_fg);
    set("activityBar.background", &p.sidebar_bg);
    set("activityBar.inactiveForeground", by_kind(p.kind, &p.ui_fg_dim, "#ffffff66"));
    set("activityBarBadge.foreground", by_kind(p.kind, &p.white, &p.widget_bg));
    set("activityBarBadge.background", &p.badge_bg);
    set("activityBar.border", &p.border_subtle);
    set("sideBar.background", &p.sidebar_bg);
    set("sideBar.foreground", &p.ui_fg);
    set("sideBarSectionHeader.background", &p.border_transparent);
    set("sideBarSectionHeader.foreground", &p.accent_light_blue);
    set("sideBarSectionHeader.border", by_kind(p.kind, "#00000015", "#cccccc33"));
    set("sideBarTitle.foreground", &p.ui_fg_muted);
    set("list.inactiveSelectionBackground", &p.list_active_bg);
    set("list.inactiveSelectionForeground", &p.ui_fg);
    set("list.hoverBackground", &p.list_active_bg);
    set("list.hoverForeground", &p.ui_fg);
    set("list.activeSelectionBackground", &p.list_active_bg);
    set("list.activeSelectionForeground", strong_fg);
    set("tree.indentGuidesStroke", &p.tree_indent_stroke);
    set("list.dropBackground", &p.list_active_bg);
    set("list.highlightForeground", &p.accent_light_blue);
    set("list.focusBackground", &p.list_active_bg);
    set("list.focusForeground", &p.ui_fg);
    set("listFilterWidget.background", &p.list_filter_bg);
    set("listFilterWidget.outline", &p.border_transparent);
    set("listFilterWidget.noMatchesOutline", &p.list_filter_no_match);
    set("statusBar.foreground", strong_fg);
    set("statusBar.background", &p.sidebar_bg);
    set("statusBarItem.hoverBackground", &p.status_item_hover_bg);
    set("statusBar.debuggingBackground", &p.status_debug_bg);
    set("statusBar.debuggingForeground", &p.white);
    set("statusBar.noFolderBackground", &p.status_no_folder_bg);
    set("statusBar.noFolderForeground", &p.white);
    set("statusBarItem.remoteBackground", &p.status_remote_bg);
    set("statusBarItem.remoteForeground", &p.white);
    set("titleBar.activeBackground", &p.sidebar_bg);
    set("titleBar.activeForeground", &p.ui_fg);
    set("titleBar.inactiveBackground", &p.title_inactive_bg);
    set("titleBar.inactiveForeground", &p.title_inactive_fg);
    set("titleBar.border", &p.border_transparent);
    set("menubar.selectionForeground", &p.ui_fg);
    set("menubar.selectionBackground", &p.menu_selection_bg);
    set("menu.foreground", &p.ui_fg);
    set("menu.background", &p.sidebar_bg);
    set("menu.selectionForeground", strong_fg);
    set("menu.selectionBackground", &p.list_active_bg);
    set("menu.selectionBorder", &p.border_transparent);
    set("menu.separatorBackground", &p.menu_separator);
    set("menu.border", &p.border_menu);
    set("button.background", &p.button_bg);
    set("button.foreground", &p.white);
    set("button.hoverBackground", &p.button_hover_bg);
    set("button.secondaryForeground", strong_fg);
    set("button.secondaryBackground", &p.button_secondary_bg);
    set("button.secondaryHoverBackground", &p.button_secondary_hover_bg);
    set("input.background", &p.editor_bg);
    set("input.border", &p.border_transparent);
    set("input.foreground", &p.ui_fg);
    set("inputOption.activeBackground", &p.input_active_bg);
    set("inputOption.activeBorder", &p.input_active_border);
    set("inputOption.activeForeground", strong_fg);
    set("input.placeholderForeground", &p.placeholder_fg);
    set("textLink.foreground", &p.link_fg);
    set("editor.background", &p.editor_bg);
    set("editor.foreground", &p.fg_muted);
    set("editorLineNumber.foreground", &p.line_number_fg);
    set("editorCursor.foreground", &p.cursor_fg);
    set("editorCursor.background", &p.cursor_bg);
    set("editor.selectionBackground", &p.selection_bg);
    set(
        "editor.inactiveSelectionBackground",
        by_kind(p.kind, &inactive_selection, "#15284583"),
    );
    set("editorWhitespace.foreground", &p.whitespace_fg);
    set("editor.selectionHighlightBackground", &p.selection_bg);
    set("editor.selectionHighlightBorder", &p.selection_border);
    set("editor.findMatchBackground", &p.find_match_bg);
    set("editor.findMatchBorder", &p.find_match_border);
    set("editor.findMatchHighlightBackground", &p.find_match_highlight_bg);
    set("editor.findMatchHighlightBorder", &p.border_transparent);
    set("editor.findRangeHighlightBackground", by_kind(p.kind, "#00000010", "#3a3d4166"));
    set("editor.findRangeHighlightBorder", &p.border_transparent);
    set("editor.rangeHighlightBackground", by_kind(p.kind, "#00000008", "#ffffff0b"));
    set("editor.rangeHighlightBorder", &p.border_transparent);
    set("editor.hoverHighlightBackground", &p.hover_highlight_bg);
    set("editor.wordHighlightStrongBackground", &p.word_highlight_strong_bg);
    set("editor.wordHighlightBackground", &p.word_highlight_bg);
    set("editor.lineHighlightBackground", &p.line_highlight_bg);
    set("editor.lineHighlightBorder", &p.line_highlight_border);
    set("editorLineNumber.activeForeground", &p.line_number_active_fg);
    set("editorLink.activeForeground", by_kind(p.kind, &p.accent_blue, "#4d93cd"));
    set("editorIndentGuide.background", &p.indent_guide_bg);
    set("editorIndentGuide.activeBackground", &p.indent_guide_active_bg);
    set("editorRuler.foreground", &p.ruler_fg);
    set("editorBracketMatch.background", &p.bracket_match_bg);
    set("editorBracketMatch.border", &p.bracket_match_border);
    set("editor.foldBackground", &p.fold_bg);
    set("editorOverviewRuler.background", &p.editor_overview_bg);
    set("editorOverviewRuler.border", &p.editor_overview_border);
    set("editorError.foreground", &p.error_icon);
    set("editorError.background", &p.editor_error_bg);
    set("editorError.border", &p.border_transparent);
    set("editorWarning.foreground", &p.warning_icon);
    set("editorWarning.background", &p.editor_warning_bg);
    set("editorWarning.border", &p.border_transparent);
    set("editorInfo.foreground", &p.info_icon);
    set("editorInfo.background", &p.editor_info_bg);
    set("editorInfo.border", &p.editor_info_bg);
    set("editorGutter.background", &p.editor_bg);
    set("editorGutter.modifiedBackground", &p.gutter_modified);
    set("editorGutter.addedBackground", &p.gutter_added);
    set("editorGutter.deletedBackground", &p.gutter_deleted);
    set("editorGutter.foldingControlForeground", &p.gutter_folding);
    set("editorCodeLens.foreground", &p.code_lens_fg);
    set("editorGroup.border", &p.editor_group_border);
    set("diffEditor.insertedTextBackground", &p.diff_inserted_bg);
    set("diffEditor.removedTextBackground", &p.diff_removed_bg);
    set("diffEditor.border", &p.diff_border);
    set("panel.background", &p.sidebar_bg);
    set("panel.border", &p.border_strong);
    set("panelTitle.activeBorder", &p.panel_active_border);
    set("panelTitle.activeForeground", &p.panel_active_fg);
    set("panelTitle.inactiveForeground", &p.panel_inactive_fg);
    set("badge.background", &p.badge_bg);
    set("badge.foreground", by_kind(p.kind, &p.white, &p.sidebar_bg));
    set("terminal.foreground", strong_fg);
    set("terminal.background", &p.terminal_bg);
    set("terminal.selectionBackground", &p.terminal_selection_bg);
    set("terminalCursor.background", &p.terminal_cursor_bg);
    set("terminalCursor.foreground", &p.white);
    set("terminal.border", &p.border_strong);
    set("terminal.ansiBlack", &p.ansi_black);
    set("terminal.ansiBlue", &p.ansi_blue);
    set("terminal.ansiBrightBlack", &p.ansi_bright_black);
    set("terminal.ansiBrightBlue", &p.ansi_bright_blue);
    set("terminal.ansiBrightCyan", &p.ansi_bright_cyan);
    set("terminal.ansiBrightGreen", &p.ansi_bright_green);
    set("terminal.ansiBrightMagenta", &p.ansi_bright_magenta);
    set("terminal.ansiBrightRed", &p.ansi_bright_red);
    set("terminal.ansiBrightWhite", &p.ansi_bright_white);
    set("terminal.ansiBrightYellow", &p.ansi_bright_yellow);
    set("terminal.ansiCyan", &p.ansi_cyan);
    set("terminal.ansiGreen", &p.ansi_green);
    set("terminal.ansiMagenta", &p.ansi_magenta);
    set("terminal.ansiRed", &p.ansi_red);
    set("terminal.ansiWhite", &p.ansi_white);
    set("terminal.ansiYellow", &p.ansi_yellow);
    set("breadcrumb.background", &p.editor_bg);
    set("breadcrumb.foreground", &p.breadcrumb_fg);
    set("breadcrumb.focusForeground", &p.breadcrumb_focus_fg);
    set("editorGroupHeader.tabsBackground", &p.sidebar_bg);
    set("editorGroupHeader.tabsBorder", &p.tab_bar_border);
    set("tab.activeForeground", strong_fg);
    set("tab.border", &p.tab_border);
    set("tab.activeBackground", &p.editor_bg);
    set("tab.activeBorder", &p.tab_active_border);
    set("tab.activeBorderTop", &p.tab_active_border);
    set("tab.inactiveBackground", &p.sidebar_bg);
    set("tab.inactiveForeground", &p.tab_inactive_fg);
    set("scrollbarSlider.background", &p.scrollbar_bg);
    set("scrollbarSlider.hoverBackground", &p.scrollbar_hover_bg);
    set("scrollbarSlider.activeBackground", &p.scrollbar_active_bg);
    set("progressBar.background", &p.progress_bar);
    set("widget.shadow", by_kind(p.kind, "#00000020", "#0000005c"));
    set("editorWidget.foreground", strong_fg);
    set("editorWidget.background", &p.widget_bg);
    set("editorWidget.resizeBorder", &p.widget_resize_border);
    set("pickerGroup.border", &p.picker_group_border);
    set("pickerGroup.foreground", &p.picker_group_fg);
    set("debugToolBar.background", &p.widget_bg);
    set("debugToolBar.border", &p.debug_toolbar_border);
    set("notifications.foreground", &p.ui_fg);
    set("notifications.background", &p.widget_bg);
    set("notificationToast.border", &p.notification_toast_border);
    set("notificationsErrorIcon.foreground", &p.error_icon);
    set("notificationsWarningIcon.foreground", &p.warning_icon);
    set("notificationsInfoIcon.foreground", &p.info_icon);
    set("notificationCenter.border", &p.notification_border);
    set("notificationCenterHeader.foreground", &p.ui_fg);
    set("notificationCenterHeader.background", &p.widget_bg);
    set("notifications.border", &p.notification_border);
    set("gitDecoration.addedResourceForeground", &p.git_added);
    set("gitDecoration.conflictingResourceForeground", &p.git_conflicting);
    set("gitDecoration.deletedResourceForeground", &p.git_deleted);
    set("gitDecoration.ignoredResourceForeground", &p.git_ignored);
    set("gitDecoration.modifiedResourceForeground", &p.git_modified);
    set("gitDecoration.stageDeletedResourceForeground", &p.git_stage_deleted);
    set("gitDecoration.stageModifiedResourceForeground", &p.git_stage_modified);
    set("gitDecoration.submoduleResourceForeground", &p.git_submodule);
    set("gitDecoration.untrackedResourceForeground", &p.git_untracked);
    set("editorMarkerNavigation.background", &p.sidebar_bg);
    set("editorMarkerNavigationError.background", &p.error_icon);
    set("editorMarkerNavigationWarning.background", &p.warning_icon);
    set("editorMarkerNavigationInfo.background", &p.info_icon);
    set("merge.currentHeaderBackground", &p.merge_current_header);
    set("merge.currentContentBackground", &p.merge_current_content);
    set("merge.incomingHeaderBackground", &p.merge_incoming_header);
    set("merge.incomingContentBackground", &p.merge_incoming_content);
    set("merge.commonHeaderBackground", &p.merge_common_header);
    set("merge.commonContentBackground", &p.sidebar_bg);
    set("editorSuggestWidget.background", &p.sidebar_bg);
    set("editorSuggestWidget.border", &p.border_medium);
    set("editorSuggestWidget.foreground", &p.fg_muted);
    set("editorSuggestWidget.highlightForeground", &p.suggest_highlight_fg);
    set("editorSuggestWidget.selectedBackground", &p.suggest_selected_bg);
    set("editorHoverWidget.foreground", &p.ui_fg);
    set("editorHoverWidget.background", &p.sidebar_bg);
    set("editorHoverWidget.border", by_kind(p.kind, "#00000020", "#ffffff2e"));
    set("peekView.border", &p.peek_border);
    set("peekViewEditor.background", &p.peek_editor_bg);
    set("peekViewEditorGutter.background", &p.peek_editor_bg);
    set("peekViewEditor.matchHighlightBackground", &p.peek_match_highlight_bg);
    set("peekViewEditor.matchHighlightBorder", &p.peek_match_highlight_border);
    set("peekViewResult.background", &p.sidebar_bg);
    set("peekViewResult.fileForeground", strong_fg);
    set("peekViewResult.lineForeground", &p.ui_fg_muted);
    set("peekViewResult.matchHighlightBackground", &p.peek_result_match_bg);
    set("peekViewResult.selectionBackground", &p.peek_result_selection_bg);
    set("peekViewResult.selectionForeground", strong_fg);
    set("peekViewTitle.background", &p.sidebar_bg);
    set(
        "peekViewTitleDescription.foreground",
        by_kind(p.kind, &p.ui_fg_dim, "#ccccccb3"),
    );
    set("peekViewTitleLabel.foreground", strong_fg);
    set("icon.foreground", &p.ui_fg);
    set("checkbox.background", &p.editor_bg);
    set("checkbox.foreground", &p.ui_fg);
    set("checkbox.border", &p.border_transparent);
    set("dropdown.background", &p.editor_bg);
    set("dropdown.foreground", &p.ui_fg);
    set("dropdown.border", &p.border_transparent);
    set("minimapGutter.addedBackground", &p.gutter_added);
    set("minimapGutter.modifiedBackground", &p.gutter_modified);
    set("minimapGutter.deletedBackground", &p.gutter_deleted);
    set("minimap.findMatchHighlight", &p.find_match_bg);
    set("minimap.selectionHighlight", &p.selection_bg);
    set("minimap.errorHighlight", &p.error_icon);
    set("minimap.warningHighlight", &p.warning_icon);
    set("minimap.background", &p.editor_bg);
    set("sideBar.dropBackground", &p.list_active_bg);
    set("editorGroup.emptyBackground", &p.editor_bg);
    set("panelSection.border", &p.border_strong);
    set("statusBarItem.activeBackground", &p.status_item_active_bg);
    set("settings.headerForeground", &p.ui_fg);
    set("settings.focusedRowBackground", &p.settings_focused_row);
    set("walkThrough.embeddedEditorBackground", &p.walk_through_bg);
    set("breadcrumb.activeSelectionForeground", &p.breadcrumb_focus_fg);
    set("editorGutter.commentRangeForeground", &p.gutter_folding);
    set("debugExceptionWidget.background", &p.widget_bg);
    set("debugExceptionWidget.border", &p.debug_toolbar_border);

    // Bracket pair colorization
    set("editorBracketHighlight.foreground1", &p.cyan);
    set("editorBracketHighlight.foreground2", &p.pink);
    set("editorBracketHighlight.foreground3", &p.purple);
    set("editorBracketHighlight.foreground4", &p.lime);
    set("editorBracketHighlight.foreground5", &p.yellow);
    set("editorBracketHighlight.foreground6", &p.fg);
    set("editorBracketHighlight.unexpectedBracket.foreground", &p.error);

    colors
}

fn by_kind<'a>(kind: ThemeKind, light: &'a str, dark: &'a str) -> &'a str {
    match kind {
        ThemeKind::Light => light,
        ThemeKind::Dark => dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{dark, light, pastel};

    #[test]
    fn keys_keep_declaration_order() {
        let colors = workbench_colors(&dark());
        let keys: Vec<&str> = colors.keys().take(3).map(String::as_str).collect();
        assert_eq!(keys, ["foreground", "focusBorder", "selection.background"]);

        let json = serde_json::to_string(&colors).unwrap();
        assert!(json.starts_with(r#"{"foreground":"#));
    }

    #[test]
    fn covers_every_workbench_key() {
        assert_eq!(workbench_colors(&dark()).len(), 256);
        assert_eq!(workbench_colors(&light()).len(), 256);
    }

    #[test]
    fn dark_inactive_selection_is_a_fixed_literal() {
        let mut palette = dark();
        palette.selection_bg = "#abcdef".into();

        let colors = workbench_colors(&palette);
        assert_eq!(
            colors.get("editor.inactiveSelectionBackground").map(String::as_str),
            Some("#15284583")
        );
    }

    #[test]
    fn light_inactive_selection_appends_alpha_to_selection() {
        let palette = light();
        let colors = workbench_colors(&palette);
        assert_eq!(
            colors.get("editor.inactiveSelectionBackground"),
            Some(&format!("{}83", palette.selection_bg))
        );
    }

    #[test]
    fn light_keeps_themed_foreground_on_inverted_surfaces() {
        let palette = light();
        let colors = workbench_colors(&palette);
        assert_eq!(colors.get("activityBar.foreground"), Some(&palette.ui_fg));
        assert_eq!(colors.get("statusBar.foreground"), Some(&palette.ui_fg));
        assert_eq!(colors.get("activityBar.inactiveForeground"), Some(&palette.ui_fg_dim));
    }

    #[test]
    fn dark_uses_white_on_inverted_surfaces() {
        let palette = pastel();
        let colors = workbench_colors(&palette);
        assert_eq!(colors.get("activityBar.foreground"), Some(&palette.white));
        assert_eq!(colors.get("badge.foreground"), Some(&palette.sidebar_bg));
        assert_eq!(
            colors.get("activityBar.inactiveForeground").map(String::as_str),
            Some("#ffffff66")
        );
    }

    #[test]
    fn bracket_pairs_follow_syntax_colors() {
        let palette = dark();
        let colors = workbench_colors(&palette);
        assert_eq!(colors.get("editorBracketHighlight.foreground1"), Some(&palette.cyan));
        assert_eq!(
            colors.get("editorBracketHighlight.unexpectedBracket.foreground"),
            Some(&palette.error)
        );
    }
}
