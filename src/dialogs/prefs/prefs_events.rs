//! Preferences/settings events.

use super::prefs::CertView;

#[derive(Clone, Debug)]
pub struct ResetSettingsEvent;

#[derive(Clone, Debug)]
pub struct ToggleHelpEvent;

#[derive(Clone, Debug)]
pub struct ToggleSettingsEvent;

#[derive(Clone, Debug)]
pub struct ToggleFullscreenEvent;

#[derive(Clone, Debug)]
pub struct ToggleDarkModeEvent;

/// Switch certifications between carousel and gallery
#[derive(Clone, Debug)]
pub struct SetCertViewEvent(pub CertView);

/// Turn every auto-advance timer on or off
#[derive(Clone, Debug)]
pub struct SetAutoplayEvent(pub bool);
