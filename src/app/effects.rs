use crate::app::{App, Message, Model};
use crate::progress::ProgressWriter;

impl App {
    /// Perform the I/O an update queued on the model.
    ///
    /// A clear is sent before a save so "start fresh" followed by reading
    /// leaves only the new position on disk.
    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        writer: &ProgressWriter,
        msg: &Message,
    ) {
        if model.take_pending_clear() {
            writer.clear();
            crate::perf::log_event("effects.progress.clear", format!("msg={msg:?}"));
        }
        if let Some(cursor) = model.take_pending_save() {
            writer.save(cursor.chapter, cursor.line);
            crate::perf::log_event(
                "effects.progress.save",
                format!("msg={msg:?} chapter={} line={}", cursor.chapter, cursor.line),
            );
        }
    }
}
