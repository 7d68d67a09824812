//! Small document-level side effects that have no natural owner component.

/// Lock or unlock page scrolling while a modal is open.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
        {
            let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
