pub mod word_of_day;
