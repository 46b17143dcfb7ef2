mod entering;
mod upkeep;
