// Calendar API: regions, event types, events and holidays.
// Handlers are thin; all reads and writes go through the CalendarStore.

pub mod handlers;
