pub mod vader_scorer;
