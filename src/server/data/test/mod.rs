mod customization;
mod star;
