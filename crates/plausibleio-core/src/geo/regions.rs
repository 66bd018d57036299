/// ISO 3166-2 subdivisions as `(code, name)`.
///
/// Covers the first-level subdivisions of AT, AU, BE, CA, CH, DE, ES, FR, GB,
/// IT, NL, PL and US.
pub(super) const REGIONS: &[(&str, &str)] = &[
    // Austria
    ("AT-1", "Burgenland"),
    ("AT-2", "Kärnten"),
    ("AT-3", "Niederösterreich"),
    ("AT-4", "Oberösterreich"),
    ("AT-5", "Salzburg"),
    ("AT-6", "Steiermark"),
    ("AT-7", "Tirol"),
    ("AT-8", "Vorarlberg"),
    ("AT-9", "Wien"),
    // Australia
    ("AU-ACT", "Australian Capital Territory"),
    ("AU-NSW", "New South Wales"),
    ("AU-NT", "Northern Territory"),
    ("AU-QLD", "Queensland"),
    ("AU-SA", "South Australia"),
    ("AU-TAS", "Tasmania"),
    ("AU-VIC", "Victoria"),
    ("AU-WA", "Western Australia"),
    // Belgium
    ("BE-BRU", "Brussels Hoofdstedelijk Gewest"),
    ("BE-VLG", "Vlaams Gewest"),
    ("BE-WAL", "Région wallonne"),
    // Canada
    ("CA-AB", "Alberta"),
    ("CA-BC", "British Columbia"),
    ("CA-MB", "Manitoba"),
    ("CA-NB", "New Brunswick"),
    ("CA-NL", "Newfoundland and Labrador"),
    ("CA-NS", "Nova Scotia"),
    ("CA-NT", "Northwest Territories"),
    ("CA-NU", "Nunavut"),
    ("CA-ON", "Ontario"),
    ("CA-PE", "Prince Edward Island"),
    ("CA-QC", "Quebec"),
    ("CA-SK", "Saskatchewan"),
    ("CA-YT", "Yukon"),
    // Switzerland
    ("CH-AG", "Aargau"),
    ("CH-AI", "Appenzell Innerrhoden"),
    ("CH-AR", "Appenzell Ausserrhoden"),
    ("CH-BE", "Bern"),
    ("CH-BL", "Basel-Landschaft"),
    ("CH-BS", "Basel-Stadt"),
    ("CH-FR", "Fribourg"),
    ("CH-GE", "Genève"),
    ("CH-GL", "Glarus"),
    ("CH-GR", "Graubünden"),
    ("CH-JU", "Jura"),
    ("CH-LU", "Luzern"),
    ("CH-NE", "Neuchâtel"),
    ("CH-NW", "Nidwalden"),
    ("CH-OW", "Obwalden"),
    ("CH-SG", "Sankt Gallen"),
    ("CH-SH", "Schaffhausen"),
    ("CH-SO", "Solothurn"),
    ("CH-SZ", "Schwyz"),
    ("CH-TG", "Thurgau"),
    ("CH-TI", "Ticino"),
    ("CH-UR", "Uri"),
    ("CH-VD", "Vaud"),
    ("CH-VS", "Valais"),
    ("CH-ZG", "Zug"),
    ("CH-ZH", "Zürich"),
    // Germany
    ("DE-BB", "Brandenburg"),
    ("DE-BE", "Berlin"),
    ("DE-BW", "Baden-Württemberg"),
    ("DE-BY", "Bayern"),
    ("DE-HB", "Bremen"),
    ("DE-HE", "Hessen"),
    ("DE-HH", "Hamburg"),
    ("DE-MV", "Mecklenburg-Vorpommern"),
    ("DE-NI", "Niedersachsen"),
    ("DE-NW", "Nordrhein-Westfalen"),
    ("DE-RP", "Rheinland-Pfalz"),
    ("DE-SH", "Schleswig-Holstein"),
    ("DE-SL", "Saarland"),
    ("DE-SN", "Sachsen"),
    ("DE-ST", "Sachsen-Anhalt"),
    ("DE-TH", "Thüringen"),
    // Spain
    ("ES-AN", "Andalucía"),
    ("ES-AR", "Aragón"),
    ("ES-AS", "Asturias, Principado de"),
    ("ES-CB", "Cantabria"),
    ("ES-CE", "Ceuta"),
    ("ES-CL", "Castilla y León"),
    ("ES-CM", "Castilla-La Mancha"),
    ("ES-CN", "Canarias"),
    ("ES-CT", "Catalunya"),
    ("ES-EX", "Extremadura"),
    ("ES-GA", "Galicia"),
    ("ES-IB", "Illes Balears"),
    ("ES-MC", "Murcia, Región de"),
    ("ES-MD", "Madrid, Comunidad de"),
    ("ES-ML", "Melilla"),
    ("ES-NC", "Navarra, Comunidad Foral de"),
    ("ES-PV", "País Vasco"),
    ("ES-RI", "La Rioja"),
    ("ES-VC", "Valenciana, Comunidad"),
    // France
    ("FR-ARA", "Auvergne-Rhône-Alpes"),
    ("FR-BFC", "Bourgogne-Franche-Comté"),
    ("FR-BRE", "Bretagne"),
    ("FR-COR", "Corse"),
    ("FR-CVL", "Centre-Val de Loire"),
    ("FR-GES", "Grand-Est"),
    ("FR-HDF", "Hauts-de-France"),
    ("FR-IDF", "Île-de-France"),
    ("FR-NAQ", "Nouvelle-Aquitaine"),
    ("FR-NOR", "Normandie"),
    ("FR-OCC", "Occitanie"),
    ("FR-PAC", "Provence-Alpes-Côte-d'Azur"),
    ("FR-PDL", "Pays-de-la-Loire"),
    // United Kingdom
    ("GB-ENG", "England"),
    ("GB-NIR", "Northern Ireland"),
    ("GB-SCT", "Scotland"),
    ("GB-WLS", "Wales"),
    // Italy
    ("IT-21", "Piemonte"),
    ("IT-23", "Valle d'Aosta"),
    ("IT-25", "Lombardia"),
    ("IT-32", "Trentino-Alto Adige"),
    ("IT-34", "Veneto"),
    ("IT-36", "Friuli Venezia Giulia"),
    ("IT-42", "Liguria"),
    ("IT-45", "Emilia-Romagna"),
    ("IT-52", "Toscana"),
    ("IT-55", "Umbria"),
    ("IT-57", "Marche"),
    ("IT-62", "Lazio"),
    ("IT-65", "Abruzzo"),
    ("IT-67", "Molise"),
    ("IT-72", "Campania"),
    ("IT-75", "Puglia"),
    ("IT-77", "Basilicata"),
    ("IT-78", "Calabria"),
    ("IT-82", "Sicilia"),
    ("IT-88", "Sardegna"),
    // Netherlands
    ("NL-DR", "Drenthe"),
    ("NL-FL", "Flevoland"),
    ("NL-FR", "Fryslân"),
    ("NL-GE", "Gelderland"),
    ("NL-GR", "Groningen"),
    ("NL-LI", "Limburg"),
    ("NL-NB", "Noord-Brabant"),
    ("NL-NH", "Noord-Holland"),
    ("NL-OV", "Overijssel"),
    ("NL-UT", "Utrecht"),
    ("NL-ZE", "Zeeland"),
    ("NL-ZH", "Zuid-Holland"),
    // Poland
    ("PL-02", "Dolnośląskie"),
    ("PL-04", "Kujawsko-Pomorskie"),
    ("PL-06", "Lubelskie"),
    ("PL-08", "Lubuskie"),
    ("PL-10", "Łódzkie"),
    ("PL-12", "Małopolskie"),
    ("PL-14", "Mazowieckie"),
    ("PL-16", "Opolskie"),
    ("PL-18", "Podkarpackie"),
    ("PL-20", "Podlaskie"),
    ("PL-22", "Pomorskie"),
    ("PL-24", "Śląskie"),
    ("PL-26", "Świętokrzyskie"),
    ("PL-28", "Warmińsko-Mazurskie"),
    ("PL-30", "Wielkopolskie"),
    ("PL-32", "Zachodniopomorskie"),
    // United States
    ("US-AK", "Alaska"),
    ("US-AL", "Alabama"),
    ("US-AR", "Arkansas"),
    ("US-AS", "American Samoa"),
    ("US-AZ", "Arizona"),
    ("US-CA", "California"),
    ("US-CO", "Colorado"),
    ("US-CT", "Connecticut"),
    ("US-DC", "District of Columbia"),
    ("US-DE", "Delaware"),
    ("US-FL", "Florida"),
    ("US-GA", "Georgia"),
    ("US-GU", "Guam"),
    ("US-HI", "Hawaii"),
    ("US-IA", "Iowa"),
    ("US-ID", "Idaho"),
    ("US-IL", "Illinois"),
    ("US-IN", "Indiana"),
    ("US-KS", "Kansas"),
    ("US-KY", "Kentucky"),
    ("US-LA", "Louisiana"),
    ("US-MA", "Massachusetts"),
    ("US-MD", "Maryland"),
    ("US-ME", "Maine"),
    ("US-MI", "Michigan"),
    ("US-MN", "Minnesota"),
    ("US-MO", "Missouri"),
    ("US-MP", "Northern Mariana Islands"),
    ("US-MS", "Mississippi"),
    ("US-MT", "Montana"),
    ("US-NC", "North Carolina"),
    ("US-ND", "North Dakota"),
    ("US-NE", "Nebraska"),
    ("US-NH", "New Hampshire"),
    ("US-NJ", "New Jersey"),
    ("US-NM", "New Mexico"),
    ("US-NV", "Nevada"),
    ("US-NY", "New York"),
    ("US-OH", "Ohio"),
    ("US-OK", "Oklahoma"),
    ("US-OR", "Oregon"),
    ("US-PA", "Pennsylvania"),
    ("US-PR", "Puerto Rico"),
    ("US-RI", "Rhode Island"),
    ("US-SC", "South Carolina"),
    ("US-SD", "South Dakota"),
    ("US-TN", "Tennessee"),
    ("US-TX", "Texas"),
    ("US-UM", "United States Minor Outlying Islands"),
    ("US-UT", "Utah"),
    ("US-VA", "Virginia"),
    ("US-VI", "Virgin Islands, U.S."),
    ("US-VT", "Vermont"),
    ("US-WA", "Washington"),
    ("US-WI", "Wisconsin"),
    ("US-WV", "West Virginia"),
    ("US-WY", "Wyoming"),
];
