use super::{Palette, ThemeKind, UiTheme};

/// High-contrast neon syntax colors on a deep indigo editor.
pub fn dark() -> Palette {
    Palette {
        name: "digitaliss".into(),
        kind: ThemeKind::Dark,
        ui_theme: UiTheme::VsDark,

        // Syntax colors
        cyan: "#39e9ff".into(),
        purple: "#9d74ff".into(),
        lime: "#baff20".into(),
        pink: "#ff0453".into(),
        yellow: "#fff487".into(),
        white: "#ffffff".into(),
        fg: "#d8d6ce".into(),
        fg_muted: "#d4d4d4".into(),
        comment: "#6c6d998d".into(),
        error: "#f44747".into(),

        // Backgrounds
        editor_bg: "#1a1925".into(),
        sidebar_bg: "#14131f".into(),
        widget_bg: "#171620".into(),
        shadow_bg: "#12111b".into(),
        list_active_bg: "#282639".into(),
        selection_bg: "#152845".into(),
        selection_border: "#556c8e".into(),
        find_match_bg: "#515c6a".into(),
        find_match_border: "#74879f".into(),
        find_match_highlight_bg: "#ea5c0055".into(),
        hover_highlight_bg: "#264f7840".into(),
        word_highlight_bg: "#575757b8".into(),
        word_highlight_strong_bg: "#004972b8".into(),
        line_highlight_bg: "#ffffff0A".into(),
        line_highlight_border: "#ffffff0e".into(),
        fold_bg: "#2b5d904d".into(),

        // UI foregrounds
        ui_fg: "#cccccc".into(),
        ui_fg_muted: "#bbbbbb".into(),
        ui_fg_dim: "#cccccc99".into(),
        accent_blue: "#007acc".into(),
        accent_light_blue: "#4fa7ea".into(),
        accent_bright_blue: "#3794ff".into(),
        badge_bg: "#82b7f9".into(),
        focus_border: "#007fd4".into(),
        progress_bar: "#007acc".into(),
        link_fg: "#3794ff".into(),

        // Borders
        border_subtle: "#ffffff28".into(),
        border_medium: "#ffffff32".into(),
        border_strong: "#ffffff59".into(),
        border_bright: "#ffffff76".into(),
        border_transparent: "#00000000".into(),
        border_menu: "#00000085".into(),

        // Editor details
        line_number_fg: "#5b5b61".into(),
        line_number_active_fg: "#e4e4e4".into(),
        cursor_fg: "#ffffff".into(),
        cursor_bg: "#000000".into(),
        whitespace_fg: "#e3e4e229".into(),
        indent_guide_bg: "#ffffff46".into(),
        indent_guide_active_bg: "#707070".into(),
        ruler_fg: "#5a5a5a".into(),
        bracket_match_bg: "#0064001a".into(),
        bracket_match_border: "#888888".into(),
        code_lens_fg: "#c4c4c4".into(),

        // Scrollbar
        scrollbar_bg: "#79797966".into(),
        scrollbar_hover_bg: "#646464b3".into(),
        scrollbar_active_bg: "#bfbfbf66".into(),

        // Buttons
        button_bg: "#282639".into(),
        button_hover_bg: "#46435e".into(),
        button_secondary_bg: "#3a3d41".into(),
        button_secondary_hover_bg: "#45494e".into(),

        // Input
        input_active_bg: "#007fd466".into(),
        input_active_border: "#007acc00".into(),
        placeholder_fg: "#a6a6a6".into(),

        // Tabs
        tab_active_border: "#00000000".into(),
        tab_inactive_fg: "#ffffff80".into(),
        tab_border: "#ffffff38".into(),
        tab_bar_border: "#ffffff32".into(),

        // Title bar
        title_inactive_bg: "#3c3c3c99".into(),
        title_inactive_fg: "#cccccc99".into(),

        // Status bar
        status_debug_bg: "#cc6633".into(),
        status_no_folder_bg: "#68217a".into(),
        status_remote_bg: "#007acc".into(),
        status_item_hover_bg: "#ffffff1f".into(),
        status_item_active_bg: "#FFFFFF25".into(),

        // Git decorations
        git_added: "#b0da52".into(),
        git_modified: "#ffb039".into(),
        git_deleted: "#ff4728".into(),
        git_conflicting: "#6c6cc4".into(),
        git_ignored: "#6f6d67".into(),
        git_untracked: "#029636".into(),
        git_stage_deleted: "#ff4a2a".into(),
        git_stage_modified: "#ffc978".into(),
        git_submodule: "#8cc7ff".into(),

        // Gutter
        gutter_modified: "#04c8ff".into(),
        gutter_added: "#afff07".into(),
        gutter_deleted: "#ff0511".into(),
        gutter_folding: "#c5c5c5".into(),

        // Diff
        diff_inserted_bg: "#9bb95528".into(),
        diff_removed_bg: "#ff000024".into(),
        diff_border: "#444444".into(),

        // Merge
        merge_current_header: "#367366".into(),
        merge_current_content: "#27403B".into(),
        merge_incoming_header: "#395F8F".into(),
        merge_incoming_content: "#28384B".into(),
        merge_common_header: "#1f1d30".into(),

        // Peek view
        peek_border: "#007acc".into(),
        peek_editor_bg: "#001f33".into(),
        peek_match_highlight_bg: "#ff8f0099".into(),
        peek_match_highlight_border: "#ee931e".into(),
        peek_result_match_bg: "#ea5c004d".into(),
        peek_result_selection_bg: "#3399ff33".into(),

        // Suggest widget
        suggest_selected_bg: "#062f4a".into(),
        suggest_highlight_fg: "#0097fb".into(),

        // Notifications
        error_icon: "#f48771".into(),
        warning_icon: "#cca700".into(),
        info_icon: "#75beff".into(),
        notification_border: "#ffffff1c".into(),
        notification_toast_border: "#ffffff12".into(),

        // Terminal
        terminal_bg: "#14131F".into(),
        terminal_cursor_bg: "#0087FF".into(),
        terminal_selection_bg: "#ffffff40".into(),
        ansi_black: "#000000".into(),
        ansi_blue: "#2472c8".into(),
        ansi_bright_black: "#666666".into(),
        ansi_bright_blue: "#3b8eea".into(),
        ansi_bright_cyan: "#29b8db".into(),
        ansi_bright_green: "#23d18b".into(),
        ansi_bright_magenta: "#d670d6".into(),
        ansi_bright_red: "#f14c4c".into(),
        ansi_bright_white: "#e5e5e5".into(),
        ansi_bright_yellow: "#f5f543".into(),
        ansi_cyan: "#11a8cd".into(),
        ansi_green: "#0dbc79".into(),
        ansi_magenta: "#bc3fbc".into(),
        ansi_red: "#cd3131".into(),
        ansi_white: "#e5e5e5".into(),
        ansi_yellow: "#e5e510".into(),

        // Breadcrumb
        breadcrumb_fg: "#fdfdfdcc".into(),
        breadcrumb_focus_fg: "#e0e0e0".into(),

        // Misc
        editor_group_border: "#ffffff76".into(),
        list_filter_bg: "#653723".into(),
        list_filter_no_match: "#be1100".into(),
        tree_indent_stroke: "#585858".into(),
        walk_through_bg: "#00000050".into(),
        settings_focused_row: "#ffffff07".into(),
        debug_toolbar_border: "#eaeaea50".into(),
        menu_separator: "#bbbbbb".into(),
        menu_selection_bg: "#ffffff1a".into(),
        widget_resize_border: "#ffffff2c".into(),
        picker_group_border: "#ffffff26".into(),
        picker_group_fg: "#54b2f9".into(),
        panel_active_border: "#e7e7e7".into(),
        panel_active_fg: "#e7e7e7".into(),
        panel_inactive_fg: "#e7e7e799".into(),
        editor_overview_bg: "#25252500".into(),
        editor_overview_border: "#7f7f7f4d".into(),
        editor_error_bg: "#B73A3400".into(),
        editor_warning_bg: "#A9904000".into(),
        editor_info_bg: "#4490BF00".into(),
    }
}

/// The dark identity with softened syntax colors and slightly lifted backgrounds.
pub fn pastel() -> Palette {
    Palette {
        name: "digitaliss Pastel".into(),

        // Softer, muted syntax colors
        cyan: "#7ec8d4".into(),
        purple: "#b9a4e0".into(),
        lime: "#a8d98a".into(),
        pink: "#e88a9f".into(),
        yellow: "#e8d4a0".into(),
        comment: "#7a7b9e99".into(),

        // Slightly lighter backgrounds
        editor_bg: "#1e1d2b".into(),
        sidebar_bg: "#1a1928".into(),
        widget_bg: "#1c1b28".into(),
        shadow_bg: "#161520".into(),
        list_active_bg: "#2d2c3e".into(),
        terminal_bg: "#1a1928".into(),
        selection_bg: "#1a3050".into(),

        // Adjusted gutter colors to match palette
        gutter_modified: "#7ec8d4".into(),
        gutter_added: "#a8d98a".into(),
        gutter_deleted: "#e88a9f".into(),

        // Adjusted git colors
        git_added: "#a8d98a".into(),
        git_modified: "#e8d4a0".into(),
        git_deleted: "#e88a9f".into(),

        // Softer badge
        badge_bg: "#9db8d4".into(),

        // Adjusted diff
        diff_inserted_bg: "#a8d98a22".into(),
        diff_removed_bg: "#e88a9f22".into(),

        ..dark()
    }
}

/// A full light-background re-skin of the dark identity.
pub fn light() -> Palette {
    Palette {
        name: "digitaliss Light".into(),
        kind: ThemeKind::Light,
        ui_theme: UiTheme::Vs,

        // Syntax colors adapted for light backgrounds
        cyan: "#0184bc".into(),
        purple: "#7c4dff".into(),
        lime: "#50a14f".into(),
        pink: "#e01050".into(),
        yellow: "#986801".into(),
        white: "#000000".into(),
        fg: "#383a42".into(),
        fg_muted: "#4a4a4a".into(),
        comment: "#a0a1a7".into(),
        error: "#e45649".into(),

        // Light backgrounds
        editor_bg: "#fafafa".into(),
        sidebar_bg: "#f0f0f3".into(),
        widget_bg: "#f5f5f7".into(),
        shadow_bg: "#00000020".into(),
        list_active_bg: "#e8e8ed".into(),
        selection_bg: "#c8ddf5".into(),
        selection_border: "#a0b8d0".into(),
        find_match_bg: "#e2c08d".into(),
        find_match_border: "#c9a060".into(),
        find_match_highlight_bg: "#ea5c0044".into(),
        hover_highlight_bg: "#0000000a".into(),
        word_highlight_bg: "#d0d0d0a0".into(),
        word_highlight_strong_bg: "#a8c8e8a0".into(),
        line_highlight_bg: "#00000008".into(),
        line_highlight_border: "#00000010".into(),
        fold_bg: "#d0e0f020".into(),

        // UI foregrounds
        ui_fg: "#383a42".into(),
        ui_fg_muted: "#6a6a6a".into(),
        ui_fg_dim: "#383a4299".into(),
        accent_blue: "#4078f2".into(),
        accent_light_blue: "#4078f2".into(),
        accent_bright_blue: "#4078f2".into(),
        badge_bg: "#4078f2".into(),
        focus_border: "#4078f2".into(),
        progress_bar: "#4078f2".into(),
        link_fg: "#4078f2".into(),

        // Borders
        border_subtle: "#00000015".into(),
        border_medium: "#00000020".into(),
        border_strong: "#00000030".into(),
        border_bright: "#00000040".into(),
        border_transparent: "#00000000".into(),
        border_menu: "#00000020".into(),

        // Editor details
        line_number_fg: "#9d9d9f".into(),
        line_number_active_fg: "#383a42".into(),
        cursor_fg: "#526fff".into(),
        cursor_bg: "#ffffff".into(),
        whitespace_fg: "#00000015".into(),
        indent_guide_bg: "#00000015".into(),
        indent_guide_active_bg: "#00000040".into(),
        ruler_fg: "#d0d0d0".into(),
        bracket_match_bg: "#a0d0a030".into(),
        bracket_match_border: "#b0b0b0".into(),
        code_lens_fg: "#999999".into(),

        // Scrollbar
        scrollbar_bg: "#00000020".into(),
        scrollbar_hover_bg: "#00000040".into(),
        scrollbar_active_bg: "#00000060".into(),

        // Buttons
        button_bg: "#4078f2".into(),
        button_hover_bg: "#5589f5".into(),
        button_secondary_bg: "#e0e0e3".into(),
        button_secondary_hover_bg: "#d0d0d5".into(),

        // Input
        input_active_bg: "#4078f266".into(),
        input_active_border: "#4078f200".into(),
        placeholder_fg: "#a0a0a0".into(),

        // Tabs
        tab_active_border: "#00000000".into(),
        tab_inactive_fg: "#383a4280".into(),
        tab_border: "#00000015".into(),
        tab_bar_border: "#00000015".into(),

        // Title bar
        title_inactive_bg: "#f0f0f399".into(),
        title_inactive_fg: "#383a4299".into(),

        // Status bar
        status_debug_bg: "#f5a623".into(),
        status_no_folder_bg: "#9b59b6".into(),
        status_remote_bg: "#4078f2".into(),
        status_item_hover_bg: "#0000000f".into(),
        status_item_active_bg: "#00000015".into(),

        // Git decorations
        git_added: "#50a14f".into(),
        git_modified: "#c18401".into(),
        git_deleted: "#e45649".into(),
        git_conflicting: "#7c4dff".into(),
        git_ignored: "#a0a1a7".into(),
        git_untracked: "#50a14f".into(),
        git_stage_deleted: "#e45649".into(),
        git_stage_modified: "#c18401".into(),
        git_submodule: "#4078f2".into(),

        // Gutter
        gutter_modified: "#4078f2".into(),
        gutter_added: "#50a14f".into(),
        gutter_deleted: "#e45649".into(),
        gutter_folding: "#999999".into(),

        // Diff
        diff_inserted_bg: "#50a14f20".into(),
        diff_removed_bg: "#e4564920".into(),
        diff_border: "#d0d0d0".into(),

        // Merge
        merge_current_header: "#50a14f60".into(),
        merge_current_content: "#50a14f30".into(),
        merge_incoming_header: "#4078f260".into(),
        merge_incoming_content: "#4078f230".into(),
        merge_common_header: "#e0e0e3".into(),

        // Peek view
        peek_border: "#4078f2".into(),
        peek_editor_bg: "#f0f4ff".into(),
        peek_match_highlight_bg: "#e2c08d99".into(),
        peek_match_highlight_border: "#c9a060".into(),
        peek_result_match_bg: "#ea5c0030".into(),
        peek_result_selection_bg: "#4078f233".into(),

        // Suggest widget
        suggest_selected_bg: "#e8e8ed".into(),
        suggest_highlight_fg: "#4078f2".into(),

        // Notifications
        error_icon: "#e45649".into(),
        warning_icon: "#c18401".into(),
        info_icon: "#4078f2".into(),
        notification_border: "#00000015".into(),
        notification_toast_border: "#00000010".into(),

        // Terminal
        terminal_bg: "#f0f0f3".into(),
        terminal_cursor_bg: "#4078f2".into(),
        terminal_selection_bg: "#00000020".into(),
        ansi_black: "#383a42".into(),
        ansi_blue: "#4078f2".into(),
        ansi_bright_black: "#a0a1a7".into(),
        ansi_bright_blue: "#5589f5".into(),
        ansi_bright_cyan: "#0184bc".into(),
        ansi_bright_green: "#50a14f".into(),
        ansi_bright_magenta: "#a626a4".into(),
        ansi_bright_red: "#e45649".into(),
        ansi_bright_white: "#383a42".into(),
        ansi_bright_yellow: "#c18401".into(),
        ansi_cyan: "#0997b3".into(),
        ansi_green: "#44a14f".into(),
        ansi_magenta: "#a626a4".into(),
        ansi_red: "#e45649".into(),
        ansi_white: "#f0f0f3".into(),
        ansi_yellow: "#c18401".into(),

        // Breadcrumb
        breadcrumb_fg: "#383a42cc".into(),
        breadcrumb_focus_fg: "#383a42".into(),

        // Misc
        editor_group_border: "#00000020".into(),
        list_filter_bg: "#e2c08d".into(),
        list_filter_no_match: "#e45649".into(),
        tree_indent_stroke: "#d0d0d0".into(),
        walk_through_bg: "#00000008".into(),
        settings_focused_row: "#00000005".into(),
        debug_toolbar_border: "#00000020".into(),
        menu_separator: "#d0d0d0".into(),
        menu_selection_bg: "#0000000a".into(),
        widget_resize_border: "#00000020".into(),
        picker_group_border: "#00000015".into(),
        picker_group_fg: "#4078f2".into(),
        panel_active_border: "#383a42".into(),
        panel_active_fg: "#383a42".into(),
        panel_inactive_fg: "#383a4299".into(),
        editor_overview_bg: "#fafafa00".into(),
        editor_overview_border: "#0000001a".into(),
        editor_error_bg: "#e4564900".into(),
        editor_warning_bg: "#c1840100".into(),
        editor_info_bg: "#4078f200".into(),
    }
}
