//! Event keys

use lazy_static::lazy_static;

use crate::key::Key;

lazy_static! {
    pub static ref BOOT_EVENT: Key = well_known("BootEvent");
    pub static ref CALL_DISCONNECT: Key = well_known("CallDisconnect");
    pub static ref CALL_SUCCESSFUL: Key = well_known("CallSuccessful");
    pub static ref UI_MESSAGE_PROMPT_RESPONSE: Key = well_known("UserInterface.Message.Prompt.Response");
    pub static ref UI_MESSAGE_RATING_RESPONSE: Key = well_known("UserInterface.Message.Rating.Response");
    pub static ref UI_MESSAGE_TEXT_INPUT_RESPONSE: Key =
        well_known("UserInterface.Message.TextInput.Response");
    pub static ref UI_EXTENSIONS_PANEL_CLICKED: Key =
        well_known("UserInterface.Extensions.Panel.Clicked");
    pub static ref UI_EXTENSIONS_WIDGET_ACTION: Key =
        well_known("UserInterface.Extensions.Widget.Action");
    pub static ref UI_ASSISTANT_NOTIFICATION: Key = well_known("UserInterface.Assistant.Notification");
}

fn well_known(text: &str) -> Key {
    Key::parse(text).expect("well-known key should always parse")
}
