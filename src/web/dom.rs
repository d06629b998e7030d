// Browser bindings: the <video> element, object URLs, files and listeners.
use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, File, FileList, HtmlInputElement, HtmlVideoElement, KeyboardEvent,
};

use super::{WebError, CONTAINER_ID, PROGRESS_TRACK_ID, VIDEO_ID};
use crate::player::{
    AudioTrack, KeyFocus, KeyModifiers, MediaCommand, PickedFile, PlayerConfig, Shortcut,
    CONFIG_ELEMENT_ID,
};

fn document() -> Result<Document, WebError> {
    window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)
}

fn video_element() -> Result<HtmlVideoElement, WebError> {
    document()?
        .get_element_by_id(VIDEO_ID)
        .ok_or(WebError::MissingElement(VIDEO_ID))?
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| WebError::MissingElement(VIDEO_ID))
}

/// Live values read straight off the `<video>` element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
}

pub fn media_snapshot() -> Option<MediaSnapshot> {
    let video = video_element().ok()?;
    Some(MediaSnapshot {
        current_time: video.current_time(),
        duration: video.duration(),
        volume: video.volume(),
        muted: video.muted(),
    })
}

/// `MediaError.code` of the element's current error, if any.
pub fn media_error_code() -> Option<u16> {
    let video = video_element().ok()?;
    let error = video.error()?;
    Some(error.code())
}

fn js_list(target: &JsValue, name: &str) -> Option<(JsValue, u32)> {
    let list = js_sys::Reflect::get(target, &name.into()).ok()?;
    if list.is_null() || list.is_undefined() {
        return None;
    }
    let len = js_sys::Reflect::get(&list, &"length".into())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u32;
    Some((list, len))
}

fn js_string(target: &JsValue, name: &str) -> String {
    js_sys::Reflect::get(target, &name.into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

/// Enumerate `audioTracks`. Browsers without multi-track support expose
/// nothing and yield an empty list.
pub fn audio_tracks() -> Vec<AudioTrack> {
    let Ok(video) = video_element() else {
        return Vec::new();
    };
    let video_js = JsValue::from(video);
    let Some((list, len)) = js_list(&video_js, "audioTracks") else {
        return Vec::new();
    };
    (0..len)
        .filter_map(|index| {
            let track = js_sys::Reflect::get_u32(&list, index).ok()?;
            Some(AudioTrack::new(
                index as usize,
                &js_string(&track, "label"),
                &js_string(&track, "language"),
            ))
        })
        .collect()
}

/// Show the `index`-th text track and disable the rest.
pub fn apply_subtitle_mode(active: Option<usize>) {
    let Ok(video) = video_element() else {
        return;
    };
    let video_js = JsValue::from(video);
    let Some((list, len)) = js_list(&video_js, "textTracks") else {
        return;
    };
    for index in 0..len {
        let Ok(track) = js_sys::Reflect::get_u32(&list, index) else {
            continue;
        };
        let mode = if Some(index as usize) == active {
            "showing"
        } else {
            "disabled"
        };
        let _ = js_sys::Reflect::set(&track, &"mode".into(), &mode.into());
    }
}

fn enable_audio_track(video: &HtmlVideoElement, active: usize) {
    let video_js = JsValue::from(video.clone());
    let Some((list, len)) = js_list(&video_js, "audioTracks") else {
        return;
    };
    for index in 0..len {
        if let Ok(track) = js_sys::Reflect::get_u32(&list, index) {
            let enabled = JsValue::from_bool(index as usize == active);
            let _ = js_sys::Reflect::set(&track, &"enabled".into(), &enabled);
        }
    }
}

fn try_play(video: &HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::debug!(?err, "play() was rejected");
            }
        });
    }
}

pub fn is_fullscreen() -> bool {
    document()
        .map(|doc| doc.fullscreen_element().is_some())
        .unwrap_or(false)
}

fn request_fullscreen() -> Result<(), WebError> {
    let container = document()?
        .get_element_by_id(CONTAINER_ID)
        .ok_or(WebError::MissingElement(CONTAINER_ID))?;
    container
        .request_fullscreen()
        .map_err(|err| WebError::Fullscreen(format!("{err:?}")))
}

fn release_object_url(url: &str) -> Result<(), WebError> {
    web_sys::Url::revoke_object_url(url)
        .map_err(|err| WebError::ObjectUrl(format!("{err:?}")))
}

fn run(command: &MediaCommand) -> Result<(), WebError> {
    match command {
        MediaCommand::Release(url) => return release_object_url(url),
        MediaCommand::EnterFullscreen => return request_fullscreen(),
        MediaCommand::ExitFullscreen => {
            document()?.exit_fullscreen();
            return Ok(());
        }
        MediaCommand::ScheduleHide(_) | MediaCommand::CancelHide => return Ok(()),
        _ => {}
    }

    let video = video_element()?;
    match command {
        MediaCommand::Load(url) => {
            video.set_src(url);
            video.load();
        }
        MediaCommand::Reload => video.load(),
        MediaCommand::Unload => {
            let _ = video.pause();
            let _ = video.remove_attribute("src");
            video.load();
        }
        MediaCommand::Play => try_play(&video),
        MediaCommand::Pause => {
            let _ = video.pause();
        }
        MediaCommand::Seek(time) => video.set_current_time(*time),
        MediaCommand::SetVolume(volume) => video.set_volume(*volume),
        MediaCommand::SetMuted(muted) => video.set_muted(*muted),
        MediaCommand::SetPlaybackRate(rate) => video.set_playback_rate(*rate),
        MediaCommand::EnableAudioTrack(index) => enable_audio_track(&video, *index),
        _ => {}
    }
    Ok(())
}

/// Forward one command to the browser. Failures are logged, never raised.
pub fn execute(command: &MediaCommand) {
    if let Err(err) = run(command) {
        tracing::warn!(?command, %err, "media command failed");
    }
}

/// Single pending auto-hide timeout. Scheduling replaces (and thereby
/// cancels) the previous one; dropping the last handle cancels it too.
#[derive(Clone, Default)]
pub struct HideTimer(Rc<RefCell<Option<Timeout>>>);

impl HideTimer {
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let previous = self
            .0
            .borrow_mut()
            .replace(Timeout::new(delay_ms, callback));
        drop(previous);
    }

    pub fn cancel(&self) {
        let pending = self.0.borrow_mut().take();
        drop(pending);
    }
}

/// Read the optional JSON config block from the host page.
pub fn load_config() -> PlayerConfig {
    let raw = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return PlayerConfig::default();
    };
    match PlayerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed player config");
            PlayerConfig::default()
        }
    }
}

/// Left edge and width of the progress track, in client coordinates.
pub fn progress_track_geometry() -> Option<(f64, f64)> {
    let element = document().ok()?.get_element_by_id(PROGRESS_TRACK_ID)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.left(), rect.width()))
}

/// A file chosen through the picker or dropped on the player.
#[derive(Clone)]
pub struct SelectedFile {
    pub info: PickedFile,
    file: File,
}

impl SelectedFile {
    fn new(file: File) -> Self {
        Self {
            info: PickedFile::new(file.name(), file.type_()),
            file,
        }
    }

    /// Create a `blob:` URL for the file. The caller owns it and must
    /// release it through [`MediaCommand::Release`].
    pub fn object_url(&self) -> Result<String, WebError> {
        web_sys::Url::create_object_url_with_blob(&self.file)
            .map_err(|err| WebError::ObjectUrl(format!("{err:?}")))
    }
}

fn collect_files(list: Option<FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(SelectedFile::new)
        .collect()
}

/// Files currently selected in the `<input type=file>` with `input_id`.
/// The input is cleared so choosing the same file again still fires.
pub fn take_input_files(input_id: &str) -> Vec<SelectedFile> {
    let Some(input) = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(input_id))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = collect_files(input.files());
    input.set_value("");
    files
}

pub fn dropped_files(evt: &DragEvent) -> Vec<SelectedFile> {
    let Some(event) = evt.data().try_as_web_event() else {
        return Vec::new();
    };
    collect_files(event.data_transfer().and_then(|transfer| transfer.files()))
}

/// Position of this click in a rapid sequence (`UIEvent.detail`).
pub fn click_count(evt: &MouseEvent) -> u32 {
    evt.data()
        .try_as_web_event()
        .map(|event| event.detail().max(1) as u32)
        .unwrap_or(1)
}

pub fn open_file_picker(input_id: &str) {
    if let Some(input) = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(input_id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    {
        input.click();
    }
}

/// A listener attached to a DOM target for as long as the guard lives.
pub struct EventListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    fn attach(
        target: web_sys::EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Self, WebError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| WebError::Listener(event, format!("{err:?}")))?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Input types that never take typed text; shortcuts stay live on them.
const NON_TEXT_INPUTS: [&str; 7] = [
    "checkbox", "radio", "button", "submit", "reset", "file", "color",
];

fn key_focus(event: &KeyboardEvent) -> KeyFocus {
    let Some(target) = event.target() else {
        return KeyFocus::Page;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "textarea" || tag == "select" {
            return KeyFocus::TextEntry;
        }
        if tag == "input" {
            let kind = element
                .get_attribute("type")
                .unwrap_or_default()
                .to_ascii_lowercase();
            return match kind.as_str() {
                "range" => KeyFocus::Slider,
                kind if NON_TEXT_INPUTS.contains(&kind) => KeyFocus::Page,
                _ => KeyFocus::TextEntry,
            };
        }
        if element
            .get_attribute("contenteditable")
            .map(|v| v.to_ascii_lowercase() != "false")
            .unwrap_or(false)
        {
            return KeyFocus::TextEntry;
        }
        current = element.parent_element();
    }

    KeyFocus::Page
}

fn shortcut_from_event(event: &KeyboardEvent) -> Option<Shortcut> {
    if event.default_prevented() || event.is_composing() {
        return None;
    }
    let modifiers = KeyModifiers {
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        alt: event.alt_key(),
    };
    Shortcut::for_focus(&event.key(), &event.code(), modifiers, key_focus(event))
}

/// Global keydown listener. `handler` returns whether it consumed the key.
pub fn listen_shortcuts<F>(mut handler: F) -> Result<EventListenerGuard, WebError>
where
    F: FnMut(Shortcut) -> bool + 'static,
{
    let target: web_sys::EventTarget = window().ok_or(WebError::NoWindow)?.into();
    let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Ok(event) = event.dyn_into::<KeyboardEvent>() else {
            return;
        };
        if let Some(shortcut) = shortcut_from_event(&event) {
            if handler(shortcut) {
                event.prevent_default();
            }
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    EventListenerGuard::attach(target, "keydown", callback)
}

/// Document `fullscreenchange` listener; `handler` receives the new state.
pub fn listen_fullscreen<F>(mut handler: F) -> Result<EventListenerGuard, WebError>
where
    F: FnMut(bool) + 'static,
{
    let target: web_sys::EventTarget = document()?.into();
    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handler(is_fullscreen());
    }) as Box<dyn FnMut(web_sys::Event)>);
    EventListenerGuard::attach(target, "fullscreenchange", callback)
}
