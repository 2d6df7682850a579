mod event_schedule_test;
