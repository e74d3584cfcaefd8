mod api_url;
mod page;
