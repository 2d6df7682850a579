mod nickname_test;
mod zone_label_test;
